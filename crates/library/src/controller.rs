//! The data-access controller

use crate::local::LocalLibrary;
use smartshelf_core::{
    Book, BookDraft, BookId, BookSource, LibraryStats, Recommendation, Result,
};
use smartshelf_remote::ApiClient;

/// Which backend the session is routed to.
///
/// Every session starts `Online`. The first operation probes the remote with
/// a list fetch; if that fails the session flips to `Offline` and never flips
/// back. Connectivity failures on later mutations are surfaced to the caller
/// without changing the mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Online,
    Offline,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Online => write!(f, "online"),
            Mode::Offline => write!(f, "offline"),
        }
    }
}

/// Owns the canonical in-memory collection and routes operations to the
/// active backend.
///
/// Mutations are optimistic: `update` and `delete` change the in-memory
/// collection before the backend write runs, and a failed write is reported
/// without rolling the in-memory change back. The caller decides how to
/// alert the user; the collection keeps the optimistic state.
pub struct Library<R: BookSource = ApiClient, L: BookSource = LocalLibrary> {
    remote: R,
    local: L,
    mode: Mode,
    books: Vec<Book>,
    loaded: bool,
}

impl Library {
    /// Creates a controller wired to the environment-configured remote API
    /// and the platform-default local store
    pub fn new() -> Result<Self> {
        let remote = ApiClient::new()
            .map_err(|e| smartshelf_core::LibraryError::Remote(e.to_string()))?;
        let local = LocalLibrary::open_default()?;
        Ok(Self::with_sources(remote, local))
    }
}

impl<R: BookSource, L: BookSource> Library<R, L> {
    /// Creates a controller over explicit backends
    pub fn with_sources(remote: R, local: L) -> Self {
        Self {
            remote,
            local,
            mode: Mode::Online,
            books: Vec::new(),
            loaded: false,
        }
    }

    /// Returns the current connectivity mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns true once the session has fallen back to the local store
    pub fn is_offline(&self) -> bool {
        self.mode == Mode::Offline
    }

    /// The collection as currently held in memory (empty before the first
    /// operation of the session)
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Per-status counts over the in-memory collection
    pub fn stats(&self) -> LibraryStats {
        LibraryStats::for_books(&self.books)
    }

    /// Returns the full collection, loading it on the first call
    pub async fn list(&mut self) -> Result<Vec<Book>> {
        self.ensure_loaded().await?;
        Ok(self.books.clone())
    }

    /// Adds a book, letting the active backend assign the id
    pub async fn add(&mut self, draft: BookDraft) -> Result<Book> {
        self.ensure_loaded().await?;
        let book = self.active().add(draft).await?;
        self.books.insert(0, book.clone());
        Ok(book)
    }

    /// Updates a book, applying the change in memory before the backend
    /// write. A failed write is surfaced but the in-memory change stays.
    pub async fn update(&mut self, book: Book) -> Result<()> {
        self.ensure_loaded().await?;
        if let Some(slot) = self.books.iter_mut().find(|b| b.id == book.id) {
            *slot = book.clone();
        }
        self.active().update(&book).await
    }

    /// Deletes a book, removing it from memory before the backend write.
    /// A failed write is surfaced but the entry is not restored.
    pub async fn delete(&mut self, id: BookId) -> Result<()> {
        self.ensure_loaded().await?;
        self.books.retain(|b| b.id != id);
        self.active().delete(id).await
    }

    /// Asks the active backend for a recommendation
    pub async fn recommend(&mut self) -> Result<Recommendation> {
        self.ensure_loaded().await?;
        self.active().recommend().await
    }

    /// One-shot initial load. Tries the remote once; failure flips the
    /// session to offline and loads (seeding if needed) from the local store.
    async fn ensure_loaded(&mut self) -> Result<()> {
        if self.loaded {
            return Ok(());
        }

        match self.remote.list().await {
            Ok(books) => {
                log::info!("Loaded {} book(s) from remote", books.len());
                self.books = books;
            }
            Err(err) => {
                log::warn!(
                    "Remote library unavailable ({err}); serving this session from local storage"
                );
                self.mode = Mode::Offline;
                self.books = self.local.list().await?;
            }
        }

        self.loaded = true;
        Ok(())
    }

    fn active(&self) -> &dyn BookSource {
        match self.mode {
            Mode::Online => &self.remote,
            Mode::Offline => &self.local,
        }
    }
}
