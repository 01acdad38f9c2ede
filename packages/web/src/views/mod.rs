mod layout;
pub use layout::AppLayout;

mod notes;
pub use notes::{ActiveNotes, ArchivedNotes};

mod create_note;
pub use create_note::CreateNote;

mod edit_note;
pub use edit_note::EditNote;
