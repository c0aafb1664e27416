//! Attribute labels and the record type every LDIF block is rendered from.

pub const DN: &str = "dn";
pub const OBJECT_CLASS: &str = "objectClass";
pub const OU: &str = "ou";
pub const CN: &str = "cn";
pub const SAM_ACCOUNT_NAME: &str = "sAMAccountName";
pub const GIVEN_NAME: &str = "givenName";
pub const SURNAME: &str = "sn";
pub const DISPLAY_NAME: &str = "displayName";
pub const MAIL: &str = "mail";
pub const USER_PRINCIPAL_NAME: &str = "userPrincipalName";
pub const DESCRIPTION: &str = "description";
pub const HOME_DIRECTORY: &str = "homeDirectory";
pub const HOME_DRIVE: &str = "homeDrive";
pub const SCRIPT_PATH: &str = "scriptPath";
pub const USER_ACCOUNT_CONTROL: &str = "userAccountControl";
pub const MEMBER_OF: &str = "memberOf";

pub const USER_CLASS: &str = "user";
pub const ORGANIZATIONAL_UNIT_CLASS: &str = "organizationalUnit";

/// One block of an LDIF file: leading comment lines, then attributes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LdifRecord {
    /// Comment lines, written without the leading "# "
    pub comments: Vec<String>,

    /// Attributes in output order
    pub attributes: Vec<(&'static str, String)>,
}

impl LdifRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a comment line
    pub fn comment(mut self, text: impl Into<String>) -> Self {
        self.comments.push(text.into());
        self
    }

    /// Add an attribute
    pub fn attribute(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((name, value.into()));
        self
    }

    /// Values of every attribute with the given name
    pub fn values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.attributes.iter()
            .filter(move |(attr, _)| *attr == name)
            .map(|(_, value)| value.as_str())
    }

    /// Render the record, one line per comment or attribute, each ending in '\n'
    pub fn render(&self) -> String {
        let mut out = String::new();
        for comment in &self.comments {
            out.push_str("# ");
            out.push_str(comment);
            out.push('\n');
        }
        for (name, value) in &self.attributes {
            out.push_str(name);
            out.push_str(": ");
            out.push_str(value);
            out.push('\n');
        }
        out
    }
}

/// Join records into a document with one blank line between blocks
pub fn render_records(records: &[LdifRecord]) -> String {
    records.iter()
        .map(LdifRecord::render)
        .collect::<Vec<_>>()
        .join("\n")
}
