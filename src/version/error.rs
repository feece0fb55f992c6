use thiserror::Error;

/// Name of a numeric version component, used in error reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Major,
    Minor,
    Patch,
}

impl Component {
    pub fn as_str(&self) -> &'static str {
        match self {
            Component::Major => "major",
            Component::Minor => "minor",
            Component::Patch => "patch",
        }
    }
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("Version number must not be empty")]
    EmptyInput,

    #[error("The {component} version number must not be negative: {value}")]
    NegativeComponent { component: Component, value: i64 },

    #[error("Cannot compare a version number to a missing value")]
    MissingOperand,

    #[error("Object is not a semantic version number")]
    NotAVersion,

    #[error("'{input}' is not a valid semantic version number")]
    InvalidFormat { input: String },

    #[error("The {component} version number in '{input}' is too large")]
    ComponentOverflow { component: Component, input: String },
}

impl VersionError {
    /// The call itself was malformed (missing, negative or foreign operand)
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self,
            VersionError::EmptyInput
                | VersionError::NegativeComponent { .. }
                | VersionError::MissingOperand
                | VersionError::NotAVersion
        )
    }

    /// The input text did not satisfy the version grammar
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            VersionError::InvalidFormat { .. } | VersionError::ComponentOverflow { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(VersionError::EmptyInput, true, false)]
    #[case(VersionError::NegativeComponent { component: Component::Minor, value: -1 }, true, false)]
    #[case(VersionError::MissingOperand, true, false)]
    #[case(VersionError::NotAVersion, true, false)]
    #[case(VersionError::InvalidFormat { input: "1.2".to_string() }, false, true)]
    #[case(
        VersionError::ComponentOverflow { component: Component::Major, input: "99999999999999999999.0.0".to_string() },
        false,
        true
    )]
    fn error_kind_is_classified(
        #[case] error: VersionError,
        #[case] argument: bool,
        #[case] format: bool,
    ) {
        assert_eq!(error.is_argument_error(), argument);
        assert_eq!(error.is_format_error(), format);
    }

    #[test]
    fn invalid_format_message_includes_rejected_text() {
        let error = VersionError::InvalidFormat {
            input: "1.2.3.4".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "'1.2.3.4' is not a valid semantic version number"
        );
    }

    #[test]
    fn negative_component_message_names_component() {
        let error = VersionError::NegativeComponent {
            component: Component::Patch,
            value: -3,
        };

        assert_eq!(
            error.to_string(),
            "The patch version number must not be negative: -3"
        );
    }
}
