use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input, visit::Visit};

use crate::{generators::record::RecordGenerator, visitors::record_visitor::RecordVisitor};

mod errors;
mod generators;
mod item_info;
mod util;
mod visitors;

/// Derives `fieldwise::Reflect` and `fieldwise::Record` for a struct, making
/// it a source and destination for `fieldwise::copy`.
///
/// This macro generates:
/// - A field-descriptor table listing the exposed fields in declaration order
/// - By-name accessors used by the copy engine to read and write those fields
///
/// # Exposed Fields
///
/// Every field visible outside its module (`pub`, `pub(crate)`, `pub(super)`, ...) is
/// exposed. Private and `pub(self)` fields are left out unless marked
/// `#[fieldwise(include)]`.
///
/// # Attributes
///
/// - `#[fieldwise(rename_all = "...")]` - **Struct**. Case convention applied to
///   every exposed name: `PascalCase`, `camelCase`, `snake_case`,
///   `SCREAMING_SNAKE_CASE`, `kebab-case`, `lowercase`, `UPPERCASE`
/// - `#[fieldwise(rename = "Name")]` - **Field**. Exact exposed name, overrides `rename_all`
/// - `#[fieldwise(skip)]` - **Field**. Never read or written by copies
/// - `#[fieldwise(include)]` - **Field**. Exposes a private field
///
/// # Required Derives
///
/// Your struct must also derive:
/// - `Clone` - For identity copies
/// - `Default` - When it appears behind `Option` or inside a `Vec` on the destination side
///
/// # Examples
///
/// ```rust,ignore
/// use fieldwise::Fieldwise;
///
/// #[derive(Fieldwise, Clone, Default)]
/// #[fieldwise(rename_all = "PascalCase")]
/// pub struct Project {
///     pub name: String,
///     #[fieldwise(rename = "CreateAT")]
///     pub created: u64,
///     #[fieldwise(skip)]
///     pub cache: Vec<u8>,
///     #[fieldwise(include)]
///     revision: u32,
/// }
/// // Exposes: "Name", "CreateAT", "Revision"
/// ```
#[proc_macro_derive(Fieldwise, attributes(fieldwise))]
pub fn fieldwise_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let mut visitor = RecordVisitor::default();
    visitor.visit_derive_input(&input);

    if let Some(error) = visitor.error.take() {
        return error.to_compile_error().into();
    }

    RecordGenerator::new(&input.ident, &input.generics, &visitor)
        .generate()
        .into()
}
