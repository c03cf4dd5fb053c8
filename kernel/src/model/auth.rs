/// Bearer token presented by the client, matched against the sessions table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken(pub String);
