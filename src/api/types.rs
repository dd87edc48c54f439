//! API response type definitions.

use std::fmt;

use serde::{Deserialize, Deserializer};

use crate::config::FileTypeFilter;
use crate::error::{Error, Result};

/// A 1-based position within a sequence of known length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub index: usize,
    pub total: usize,
}

impl Position {
    pub fn new(index: usize, total: usize) -> Self {
        Self { index, total }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.index, self.total)
    }
}

/// Identifier of a board listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageId {
    /// The first page, served as `index.json`.
    Index,
    /// Any later page, served as `<n>.json`.
    Number(u32),
}

impl PageId {
    /// Map a 1-based page number to its identifier.
    pub fn from_page_number(page: u32) -> Self {
        if page <= 1 {
            PageId::Index
        } else {
            PageId::Number(page)
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageId::Index => write!(f, "index"),
            PageId::Number(n) => write!(f, "{}", n),
        }
    }
}

/// One page of a board listing.
#[derive(Debug, Deserialize)]
pub struct ListingPage {
    pub threads: Vec<ThreadSummary>,
}

/// A thread as it appears in a listing page.
#[derive(Debug, Clone, Deserialize)]
pub struct ThreadSummary {
    #[serde(deserialize_with = "number_or_string")]
    pub thread_num: u64,
}

/// A thread discovered on a listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadReference {
    pub numeric_id: u64,
    pub position: Position,
    pub page: PageId,
}

impl ListingPage {
    /// Thread references in page order.
    pub fn thread_refs(&self, page: PageId) -> Vec<ThreadReference> {
        let total = self.threads.len();
        self.threads
            .iter()
            .enumerate()
            .map(|(i, thread)| ThreadReference {
                numeric_id: thread.thread_num,
                position: Position::new(i + 1, total),
                page,
            })
            .collect()
    }
}

/// A thread document as returned by `res/<id>.json`.
///
/// `threads` and `posts` are required. An error document without them is
/// rejected rather than read as an empty thread.
#[derive(Debug, Deserialize)]
pub struct ThreadDocument {
    pub threads: Vec<ThreadBody>,
}

#[derive(Debug, Deserialize)]
pub struct ThreadBody {
    pub posts: Vec<Post>,
}

/// A single message within a thread.
#[derive(Debug, Deserialize)]
pub struct Post {
    /// Missing or `null` on posts without attachments.
    #[serde(default)]
    pub files: Option<Vec<Attachment>>,
}

impl Post {
    pub fn files(&self) -> &[Attachment] {
        self.files.as_deref().unwrap_or_default()
    }
}

/// An attachment entry whose only required field is its type code.
///
/// The rest of the entry is kept as raw JSON and read into a
/// [`FileDescriptor`] only when the file is not ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    pub type_code: u32,
    raw: serde_json::Value,
}

impl Attachment {
    pub fn descriptor(&self) -> serde_json::Result<FileDescriptor> {
        FileDescriptor::deserialize(&self.raw)
    }
}

impl<'de> Deserialize<'de> for Attachment {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = serde_json::Value::deserialize(deserializer)?;
        let type_code = raw
            .get("type")
            .and_then(serde_json::Value::as_u64)
            .and_then(|code| u32::try_from(code).ok())
            .ok_or_else(|| serde::de::Error::missing_field("type"))?;
        Ok(Self { type_code, raw })
    }
}

/// A file attached to a post.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileDescriptor {
    /// Server-relative URL path.
    #[serde(rename = "path")]
    pub remote_path: String,

    /// Server-side name, used when `full_name` is absent.
    #[serde(rename = "name")]
    pub display_name: String,

    /// Original upload name.
    #[serde(rename = "fullname", default)]
    pub full_name: Option<String>,

    /// MD5 of the file contents.
    #[serde(rename = "md5")]
    pub content_hash: String,

    #[serde(rename = "type")]
    pub type_code: u32,
}

impl FileDescriptor {
    /// The preferred name to show and save the file under.
    pub fn preferred_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.display_name)
    }
}

/// A file yielded from a thread together with where it sits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadFile {
    pub descriptor: FileDescriptor,
    pub post: Position,
    pub file: Position,
}

impl ThreadFile {
    /// Status string shown next to the progress line.
    pub fn status(&self) -> String {
        format!(
            "{:>3}/{:>3}:{}/{}",
            self.post.index, self.post.total, self.file.index, self.file.total
        )
    }
}

impl ThreadDocument {
    /// Files of every thread in the document, skipping ignored types.
    ///
    /// Skipped files still consume their position within the post and are
    /// never read beyond their type. A kept entry that is not a valid file
    /// yields [`Error::MalformedFile`].
    pub fn files<'a>(
        &'a self,
        filter: &'a FileTypeFilter,
    ) -> impl Iterator<Item = Result<ThreadFile>> + 'a {
        self.threads.iter().flat_map(move |thread| {
            let total_posts = thread.posts.len();
            thread
                .posts
                .iter()
                .enumerate()
                .flat_map(move |(i, post)| {
                    let files = post.files();
                    let total_files = files.len();
                    files
                        .iter()
                        .enumerate()
                        .filter(move |(_, attachment)| !filter.is_ignored(attachment.type_code))
                        .map(move |(j, attachment)| {
                            let post = Position::new(i + 1, total_posts);
                            let file = Position::new(j + 1, total_files);
                            attachment
                                .descriptor()
                                .map(|descriptor| ThreadFile {
                                    descriptor,
                                    post,
                                    file,
                                })
                                .map_err(|source| Error::MalformedFile { post, file, source })
                        })
                })
        })
    }

    /// Number of attached files, ignored or not.
    pub fn total_files(&self) -> usize {
        self.threads
            .iter()
            .flat_map(|thread| &thread.posts)
            .map(|post| post.files().len())
            .sum()
    }
}

fn number_or_string<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(u64),
        String(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THREAD_JSON: &str = r#"{
        "threads": [{
            "posts": [
                {"files": [
                    {"path": "/x/src/123/1.png", "name": "1.png", "fullname": "cat.png", "md5": "aaa", "type": 2},
                    {"path": "/x/src/123/2.png", "name": "2.png", "md5": "bbb", "type": 100},
                    {"path": "/x/src/123/3.webm", "name": "3.webm", "fullname": "clip.webm", "md5": "ccc", "type": 6}
                ]},
                {"files": []},
                {"comment": "no attachments"},
                {"files": null},
                {"files": [
                    {"path": "/x/src/123/4.jpg", "name": "4.jpg", "md5": "ddd", "type": 1}
                ]}
            ]
        }]
    }"#;

    #[test]
    fn test_page_id_tokens() {
        assert_eq!(PageId::from_page_number(1).to_string(), "index");
        assert_eq!(PageId::from_page_number(2).to_string(), "2");
        assert_eq!(PageId::from_page_number(9).to_string(), "9");
    }

    #[test]
    fn test_listing_thread_refs() {
        let page: ListingPage =
            serde_json::from_str(r#"{"threads": [{"thread_num": 10}, {"thread_num": "20"}]}"#)
                .unwrap();
        let refs = page.thread_refs(PageId::Number(3));

        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].numeric_id, 10);
        assert_eq!(refs[0].position, Position::new(1, 2));
        assert_eq!(refs[1].numeric_id, 20);
        assert_eq!(refs[1].position, Position::new(2, 2));
        assert_eq!(refs[1].page, PageId::Number(3));
    }

    #[test]
    fn test_listing_rejects_non_numeric_thread() {
        let result: serde_json::Result<ListingPage> =
            serde_json::from_str(r#"{"threads": [{"thread_num": "abc"}]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_files_skip_ignored_without_renumbering() {
        let doc: ThreadDocument = serde_json::from_str(THREAD_JSON).unwrap();
        let filter = FileTypeFilter::default();
        let files: Vec<_> = doc.files(&filter).collect::<Result<_>>().unwrap();

        let hashes: Vec<_> = files
            .iter()
            .map(|f| f.descriptor.content_hash.as_str())
            .collect();
        assert_eq!(hashes, vec!["aaa", "ccc", "ddd"]);

        assert_eq!(files[0].post, Position::new(1, 5));
        assert_eq!(files[0].file, Position::new(1, 3));
        assert_eq!(files[1].file, Position::new(3, 3));
        assert_eq!(files[2].post, Position::new(5, 5));
        assert_eq!(files[2].file, Position::new(1, 1));
    }

    #[test]
    fn test_yielded_plus_ignored_equals_total() {
        let doc: ThreadDocument = serde_json::from_str(THREAD_JSON).unwrap();

        for filter in [
            FileTypeFilter::default(),
            FileTypeFilter::none(),
            [1, 2, 6, 100].into_iter().collect(),
        ] {
            let yielded = doc.files(&filter).count();
            let ignored = doc
                .threads
                .iter()
                .flat_map(|t| &t.posts)
                .flat_map(|p| p.files())
                .filter(|f| filter.is_ignored(f.type_code))
                .count();
            assert_eq!(yielded + ignored, doc.total_files());
        }
    }

    #[test]
    fn test_multiple_threads_are_all_walked() {
        let doc: ThreadDocument = serde_json::from_str(
            r#"{"threads": [
                {"posts": [{"files": [{"path": "/a", "name": "a", "md5": "1", "type": 1}]}]},
                {"posts": [{"files": [{"path": "/b", "name": "b", "md5": "2", "type": 1}]}]}
            ]}"#,
        )
        .unwrap();

        assert_eq!(doc.files(&FileTypeFilter::default()).count(), 2);
    }

    #[test]
    fn test_error_document_is_rejected() {
        let error_body = r#"{"error": {"code": -3, "message": "gone"}, "result": 0}"#;

        assert!(serde_json::from_str::<ThreadDocument>(error_body).is_err());
        assert!(serde_json::from_str::<ListingPage>(error_body).is_err());
        assert!(serde_json::from_str::<ThreadDocument>(r#"{"threads": [{}]}"#).is_err());
    }

    #[test]
    fn test_ignored_entry_needs_only_a_type() {
        let doc: ThreadDocument = serde_json::from_str(
            r#"{"threads": [{"posts": [{"files": [
                {"path": "/x/stickers/s.png", "name": "s.png", "type": 100},
                {"type": 100},
                {"path": "/x/src/1/p.png", "name": "p.png", "md5": "p1", "type": 2}
            ]}]}]}"#,
        )
        .unwrap();

        let files: Vec<_> = doc
            .files(&FileTypeFilter::default())
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].descriptor.content_hash, "p1");
        assert_eq!(files[0].file, Position::new(3, 3));
        assert_eq!(doc.total_files(), 3);
    }

    #[test]
    fn test_entry_without_type_is_rejected() {
        let result: serde_json::Result<ThreadDocument> = serde_json::from_str(
            r#"{"threads": [{"posts": [{"files": [{"path": "/a", "name": "a", "md5": "1"}]}]}]}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_hash_is_rejected() {
        let result: serde_json::Result<FileDescriptor> =
            serde_json::from_str(r#"{"path": "/a", "name": "a", "type": 1}"#);
        assert!(result.is_err());

        // Only a kept entry is read in full.
        let doc: ThreadDocument = serde_json::from_str(
            r#"{"threads": [{"posts": [{}, {"files": [{"path": "/a", "name": "a", "type": 1}]}]}]}"#,
        )
        .unwrap();
        let errors: Vec<_> = doc.files(&FileTypeFilter::default()).collect();
        assert_eq!(errors.len(), 1);
        match &errors[0] {
            Err(Error::MalformedFile { post, file, .. }) => {
                assert_eq!(*post, Position::new(2, 2));
                assert_eq!(*file, Position::new(1, 1));
            }
            other => panic!("unexpected item: {:?}", other),
        }
        assert_eq!(doc.files(&[1].into_iter().collect()).count(), 0);
    }

    #[test]
    fn test_preferred_name_falls_back() {
        let doc: ThreadDocument = serde_json::from_str(THREAD_JSON).unwrap();
        let files: Vec<_> = doc
            .files(&FileTypeFilter::none())
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(files[0].descriptor.preferred_name(), "cat.png");
        assert_eq!(files[1].descriptor.preferred_name(), "2.png");
    }

    #[test]
    fn test_status_string() {
        let file = ThreadFile {
            descriptor: FileDescriptor {
                remote_path: "/b/src/1/1.png".into(),
                display_name: "1.png".into(),
                full_name: None,
                content_hash: "abc".into(),
                type_code: 1,
            },
            post: Position::new(7, 120),
            file: Position::new(2, 4),
        };
        assert_eq!(file.status(), "  7/120:2/4");
    }
}
