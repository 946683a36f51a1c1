//! Shared record corpus for engine tests: people write posts, posts carry
//! comments, and posts and comments collect likes.

use crate::{error::AggregateError, record, record::Record, value::Value};

pub(crate) fn posts() -> Vec<Record> {
    vec![
        record! { "post_id" => 1, "author_id" => 1, "text" => "Post #1" },
        record! { "post_id" => 2, "author_id" => 1, "text" => "Post #2" },
        record! { "post_id" => 3, "author_id" => 2, "text" => "Post #3" },
    ]
}

pub(crate) fn comments() -> Vec<Record> {
    vec![
        record! { "comment_id" => 1, "post_id" => 1, "author_id" => 1, "text" => "Re: Post #1" },
        record! { "comment_id" => 2, "post_id" => 3, "author_id" => 1, "text" => "Re (1): Post #3" },
        record! { "comment_id" => 3, "post_id" => 3, "author_id" => 2, "text" => "Re (2): Post #3" },
    ]
}

pub(crate) fn likes() -> Vec<Record> {
    vec![
        record! { "object_id" => 1, "kind" => "comment", "author_id" => 1 },
        record! { "object_id" => 2, "kind" => "post", "author_id" => 1 },
        record! { "object_id" => 3, "kind" => "post", "author_id" => 1 },
        record! { "object_id" => 3, "kind" => "post", "author_id" => 2 },
    ]
}

/// Posts written by the given authors.
pub(crate) fn posts_for(author_ids: &[Value]) -> Result<Vec<Record>, AggregateError> {
    Ok(filtered(posts(), "author_id", author_ids))
}

/// Comments attached to the given posts.
pub(crate) fn comments_for(post_ids: &[Value]) -> Result<Vec<Record>, AggregateError> {
    Ok(filtered(comments(), "post_id", post_ids))
}

/// Comments written by the given authors.
pub(crate) fn comments_by(author_ids: &[Value]) -> Result<Vec<Record>, AggregateError> {
    Ok(filtered(comments(), "author_id", author_ids))
}

/// Likes of the given kind attached to the given objects.
pub(crate) fn likes_for(kind: &str, object_ids: &[Value]) -> Result<Vec<Record>, AggregateError> {
    Ok(likes()
        .into_iter()
        .filter(|like| like.get("kind") == Some(&Value::from(kind)))
        .filter(|like| like.get("object_id").is_some_and(|id| object_ids.contains(id)))
        .collect())
}

fn filtered(records: Vec<Record>, field: &str, ids: &[Value]) -> Vec<Record> {
    records
        .into_iter()
        .filter(|record| record.get(field).is_some_and(|id| ids.contains(id)))
        .collect()
}
