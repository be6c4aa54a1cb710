pub mod batch;
pub mod college;
pub mod document;
pub mod log;
pub mod school;
pub mod sequence;
pub mod submission;

use ic_stable_structures::{
    DefaultMemoryImpl,
    memory_manager::{MemoryId, MemoryManager, VirtualMemory},
};
use std::cell::RefCell;

///
/// Intake stable memory IDs
///
/// Principles:
/// - IDs are grouped by state authority
/// - Each group owns a contiguous block
/// - Gaps between blocks are expansion reserves
///
/// IDs are permanent once assigned and MUST NOT be renumbered or reused.
///

pub mod memory {

    // ---------------------------------------------------------------------
    // Directory state (1–7)
    //
    // Ownership:
    // - Schools, colleges (with embedded campuses), batches
    // - Id sequences
    // ---------------------------------------------------------------------

    pub mod directory {
        pub const SCHOOLS_ID: u8 = 1;
        pub const COLLEGES_ID: u8 = 2;
        pub const BATCHES_ID: u8 = 3;
        pub const SEQUENCES_ID: u8 = 4;

        // Reserved: 5–7
    }

    // ---------------------------------------------------------------------
    // Intake submissions (8–11)
    // ---------------------------------------------------------------------

    pub mod submission {
        pub const SUBMISSIONS_ID: u8 = 8;

        // Reserved: 9–11
    }

    // ---------------------------------------------------------------------
    // Observability (12–15)
    // ---------------------------------------------------------------------

    pub mod observability {
        pub const LOG_INDEX_ID: u8 = 12;
        pub const LOG_DATA_ID: u8 = 13;

        // Reserved: 14–15
    }
}

///
/// StableMemory
///

pub type StableMemory = VirtualMemory<DefaultMemoryImpl>;

// -----------------------------------------------------------------------------
// MEMORY_MANAGER
// -----------------------------------------------------------------------------
// Shared stable-memory manager. Stored as a thread-local so stable structures
// can grab virtual memory slots without global mutable state.
// -----------------------------------------------------------------------------

thread_local! {
    static MEMORY_MANAGER: RefCell<MemoryManager<DefaultMemoryImpl>> =
        RefCell::new(MemoryManager::init(DefaultMemoryImpl::default()));
}

/// Return the virtual memory slot for `id`.
pub(crate) fn stable_memory(id: u8) -> StableMemory {
    MEMORY_MANAGER.with_borrow(|mgr| mgr.get(MemoryId::new(id)))
}
