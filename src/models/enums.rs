use serde::{Deserialize, Serialize};

use super::ModelError;

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// Wire strings are the exact literals the analysis service emits.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(ParameterStatus {
    High => "High",
    Low => "Low",
    Normal => "Normal",
});

str_enum!(TrendDirection {
    Increased => "Increased",
    Decreased => "Decreased",
    Unchanged => "Unchanged",
});

impl ParameterStatus {
    /// Abnormal = outside the reference range (High or Low).
    pub fn is_abnormal(&self) -> bool {
        !matches!(self, Self::Normal)
    }
}
