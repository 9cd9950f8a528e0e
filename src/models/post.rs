use serde::{ Deserialize, Serialize };

/// A record from the posts endpoint. Extra fields such as `userId` are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub body: String,
}
