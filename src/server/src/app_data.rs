/// Application state shared across requests.
#[derive(Debug, Clone)]
pub struct DocDiffAppData {
    /// Cap on a single uploaded document, enforced while draining the
    /// multipart stream
    pub max_upload_bytes: usize,
}

impl DocDiffAppData {
    pub fn new(max_upload_bytes: usize) -> DocDiffAppData {
        DocDiffAppData { max_upload_bytes }
    }
}
