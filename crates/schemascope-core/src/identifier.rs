use std::fmt;

use crate::error::{Error, Result};

/// Schema-qualified identity shared by every database object.
///
/// Both parts must be non-blank; equality, ordering, and hashing are by the
/// `(schema, name)` pair.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectName {
    schema: String,
    name: String,
}

impl ObjectName {
    pub fn new(
        entity: &'static str,
        schema: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self> {
        let schema = schema.into();
        let name = name.into();
        require_non_blank(entity, "schema", &schema)?;
        require_non_blank(entity, "name", &name)?;
        Ok(Self { schema, name })
    }

    pub fn schema(&self) -> &str {
        &self.schema
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `schema.name`, used as the display identity throughout reports.
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.schema, self.name)
    }

    /// `[schema].[name]`, the bracket-quoted form report generators emit.
    pub fn bracketed(&self) -> String {
        format!("[{}].[{}]", self.schema, self.name)
    }
}

impl fmt::Display for ObjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.schema, self.name)
    }
}

pub(crate) fn require_non_blank(
    entity: &'static str,
    field: &'static str,
    value: &str,
) -> Result<()> {
    if value.trim().is_empty() {
        Err(Error::BlankField { entity, field })
    } else {
        Ok(())
    }
}
