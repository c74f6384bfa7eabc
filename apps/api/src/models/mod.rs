pub mod notes_request;
