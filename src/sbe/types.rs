//! # SBE Descriptor Types
//!
//! Static metadata the schema compiler attaches to every field and message.
//!
//! Descriptors are plain `const` values. The codec reads them to decide
//! whether a field exists in a given acting version, what its null sentinel
//! is, and how many bytes a block occupies.

use std::fmt;

/// Field presence as declared in the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Presence {
    /// The field must always carry a legal value.
    #[default]
    Required,
    /// The null sentinel may be used to mark the field as absent.
    Optional,
    /// The value is fixed by the schema.
    Constant,
}

impl Presence {
    /// Schema spelling of this presence.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Optional => "optional",
            Self::Constant => "constant",
        }
    }
}

impl fmt::Display for Presence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keys of the meta attributes a field exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetaAttribute {
    /// Epoch of a timestamp field.
    Epoch,
    /// Time unit of a timestamp field.
    TimeUnit,
    /// Semantic type (e.g. `UTCTimestamp`).
    SemanticType,
    /// Field presence.
    Presence,
}

/// Static metadata for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field name as declared in the schema.
    pub name: &'static str,
    /// Schema field id.
    pub id: u16,
    /// Version in which the field was introduced.
    pub since_version: u16,
    /// Version in which the field was deprecated, 0 if never.
    pub deprecated: u16,
    /// Declared presence.
    pub presence: Presence,
    /// Epoch meta attribute.
    pub epoch: &'static str,
    /// Time unit meta attribute.
    pub time_unit: &'static str,
    /// Semantic type meta attribute.
    pub semantic_type: &'static str,
}

impl FieldDescriptor {
    /// A required field present since version 0.
    #[must_use]
    pub const fn new(name: &'static str, id: u16) -> Self {
        Self {
            name,
            id,
            since_version: 0,
            deprecated: 0,
            presence: Presence::Required,
            epoch: "",
            time_unit: "",
            semantic_type: "",
        }
    }

    /// Sets the version in which the field was introduced.
    #[must_use]
    pub const fn since(self, version: u16) -> Self {
        Self {
            since_version: version,
            ..self
        }
    }

    /// Sets the version in which the field was deprecated.
    #[must_use]
    pub const fn deprecated_in(self, version: u16) -> Self {
        Self {
            deprecated: version,
            ..self
        }
    }

    /// Marks the field optional.
    #[must_use]
    pub const fn optional(self) -> Self {
        Self {
            presence: Presence::Optional,
            ..self
        }
    }

    /// Marks the field as a UTC timestamp with the given unit.
    #[must_use]
    pub const fn timestamp(self, time_unit: &'static str) -> Self {
        Self {
            epoch: "unix",
            time_unit,
            semantic_type: "UTCTimestamp",
            ..self
        }
    }

    /// Returns true if the field exists in `acting_version`.
    #[inline]
    #[must_use]
    pub const fn in_acting_version(&self, acting_version: u16) -> bool {
        acting_version >= self.since_version
    }

    /// Returns true if the field is deprecated as of `version`.
    #[inline]
    #[must_use]
    pub const fn is_deprecated_in(&self, version: u16) -> bool {
        self.deprecated != 0 && version >= self.deprecated
    }

    /// Looks up a meta attribute. Unset attributes are empty strings.
    #[must_use]
    pub const fn meta_attribute(&self, attribute: MetaAttribute) -> &'static str {
        match attribute {
            MetaAttribute::Epoch => self.epoch,
            MetaAttribute::TimeUnit => self.time_unit,
            MetaAttribute::SemanticType => self.semantic_type,
            MetaAttribute::Presence => self.presence.as_str(),
        }
    }
}

/// Static identity of a message type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageDescriptor {
    /// Message name.
    pub name: &'static str,
    /// Template id carried in the message header.
    pub template_id: u16,
    /// Schema id carried in the message header.
    pub schema_id: u16,
    /// Schema version this codec was built against.
    pub schema_version: u16,
    /// Fixed block length at `schema_version`.
    pub block_length: u16,
    /// Semantic type of the message.
    pub semantic_type: &'static str,
    /// Semantic version of the schema.
    pub semantic_version: &'static str,
}
