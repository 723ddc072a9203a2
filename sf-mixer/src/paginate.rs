use sf_core::models::{PageError, PageRequest};

/// Slice page `page` (1-based) of `page_size` items out of an arranged sequence.
///
/// Pages past the end are empty rather than an error. A zero page number or
/// page size is a caller error.
pub fn paginate<T>(sequence: &[T], page: usize, page_size: usize) -> Result<&[T], PageError> {
    let request = PageRequest::new(page, page_size)?;

    let start = request.offset();
    if start >= sequence.len() {
        return Ok(&[]);
    }
    let end = start.saturating_add(page_size).min(sequence.len());
    Ok(&sequence[start..end])
}
