//! Groups clippings by book, keeping first-seen order.

use std::collections::HashMap;

use super::types::{Book, BookKey, Clipping};

/// Partition clippings into books.
///
/// Books appear in the order their first clipping appears; clippings keep
/// their relative order inside a book. Nothing is dropped.
pub fn group_by_book<I>(clippings: I) -> Vec<Book>
where
    I: IntoIterator<Item = Clipping>,
{
    let mut books: Vec<Book> = Vec::new();
    let mut positions: HashMap<BookKey, usize> = HashMap::new();

    for clipping in clippings {
        let position = *positions.entry(clipping.book.clone()).or_insert_with(|| {
            books.push(Book::new(clipping.book.clone()));
            books.len() - 1
        });
        books[position].clippings.push(clipping);
    }

    books
}
