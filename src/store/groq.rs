use crate::constants::DOCUMENT_TYPE;
use crate::store::MediaQuery;

const PROJECTION: &str = r#"{
  _id,
  _type,
  _createdAt,
  fact,
  image{ asset->{ _id, url } },
  video{ asset->{ _id, url } },
  uploader
}"#;

/// Render a query as GROQ, newest documents first.
pub fn build_query(query: &MediaQuery) -> String {
    match query {
        MediaQuery::Gallery => format!(
            r#"*[_type == "{}" && (defined(image) || defined(video))] | order(_createdAt desc){}"#,
            DOCUMENT_TYPE, PROJECTION
        ),
        MediaQuery::Greetings => format!(
            r#"*[_type == "{}" && defined(fact)] | order(_createdAt desc){}"#,
            DOCUMENT_TYPE, PROJECTION
        ),
        MediaQuery::ById(id) => format!(
            r#"*[_id == "{}"]{}"#,
            escape_string(id),
            PROJECTION
        ),
    }
}

fn escape_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
