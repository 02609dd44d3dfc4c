use serde::Serialize;
use serde_json::Value;

use crate::error::{RagFlowError, Result};

/// Flattens a parameter struct into `key=value` pairs for a query string.
///
/// `None`/null fields are omitted, booleans render as `true`/`false`, arrays
/// are joined with `,` and nested objects are sent as compact JSON.
pub fn query_pairs<T: Serialize + ?Sized>(params: &T) -> Result<Vec<(String, String)>> {
    match serde_json::to_value(params)? {
        Value::Null => Ok(Vec::new()),
        Value::Object(map) => Ok(map
            .into_iter()
            .filter_map(|(key, value)| render(value).map(|rendered| (key, rendered)))
            .collect()),
        other => Err(RagFlowError::Validation(format!(
            "Query parameters must serialize to an object, got: {other}"
        ))),
    }
}

/// Renders the pairs as `a=1&b=true`, URL-encoding keys and values.
pub fn encode_query<T: Serialize + ?Sized>(params: &T) -> Result<String> {
    let pairs = query_pairs(params)?;
    Ok(url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish())
}

fn render(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(flag) => Some(if flag { "true" } else { "false" }.to_string()),
        Value::Number(number) => Some(number.to_string()),
        Value::String(text) => Some(text),
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(render)
                .collect::<Vec<_>>()
                .join(","),
        ),
        object @ Value::Object(_) => Some(object.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Serialize)]
    struct Params {
        page: Option<u32>,
        page_size: Option<u32>,
        desc: Option<bool>,
        name: Option<String>,
    }

    #[test]
    fn test_omits_none_fields() {
        let params = Params {
            page: Some(2),
            page_size: None,
            desc: None,
            name: None,
        };
        assert_eq!(
            query_pairs(&params).unwrap(),
            vec![("page".to_string(), "2".to_string())]
        );
    }

    #[test]
    fn test_booleans_render_literally() {
        let params = Params {
            page: None,
            page_size: None,
            desc: Some(false),
            name: None,
        };
        assert_eq!(encode_query(&params).unwrap(), "desc=false");
    }

    #[test]
    fn test_strings_are_url_encoded() {
        let params = Params {
            page: None,
            page_size: None,
            desc: None,
            name: Some("q&a set".to_string()),
        };
        assert_eq!(encode_query(&params).unwrap(), "name=q%26a+set");
    }

    #[test]
    fn test_pairs_joined_with_ampersand() {
        let params = Params {
            page: Some(1),
            page_size: Some(30),
            desc: Some(true),
            name: None,
        };
        let encoded = encode_query(&params).unwrap();
        let mut pairs: Vec<&str> = encoded.split('&').collect();
        pairs.sort_unstable();
        assert_eq!(pairs, vec!["desc=true", "page=1", "page_size=30"]);
    }

    #[test]
    fn test_arrays_are_comma_joined() {
        let params = serde_json::json!({"ids": ["a", "b", "c"]});
        assert_eq!(
            query_pairs(&params).unwrap(),
            vec![("ids".to_string(), "a,b,c".to_string())]
        );
    }

    #[test]
    fn test_unit_is_empty() {
        assert!(query_pairs(&()).unwrap().is_empty());
    }

    #[test]
    fn test_scalar_is_rejected() {
        let result = query_pairs(&42);
        assert!(matches!(result, Err(RagFlowError::Validation(_))));
    }
}
