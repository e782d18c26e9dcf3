pub mod record_visitor;
