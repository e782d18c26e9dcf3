use syn::Ident;

/// One field that takes part in copies.
pub struct ExposedField<'ast> {
    pub ident: &'ast Ident,
    /// Name matched by the resolver, after `rename` / `rename_all`.
    pub name: String,
}

#[derive(Default)]
pub struct FieldOptions {
    pub skip: bool,
    pub include: bool,
    pub rename: Option<String>,
}
