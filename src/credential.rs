/// Identity and secret a session is unlocked with.
///
/// Comparison is plain equality on both fields, there is no hashing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    identity: String,
    secret: String,
}

impl Credential {
    pub fn new(identity: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            secret: secret.into(),
        }
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Both fields have to match exactly, case and whitespace included.
    pub fn matches(&self, identity: &str, secret: &str) -> bool {
        self.identity == identity && self.secret == secret
    }
}
