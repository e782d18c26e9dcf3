use std::collections::HashSet;

use syn::{DeriveInput, ext::IdentExt, visit::Visit};

use crate::{
    errors::FieldwiseDeriveError,
    item_info::record::ExposedField,
    util::{container_rename_rule, extract_fields, field_options, is_exposed},
};

/// Collects the exposed fields of a `#[derive(Fieldwise)]` struct.
#[derive(Default)]
pub struct RecordVisitor<'ast> {
    pub fields: Vec<ExposedField<'ast>>,
    pub error: Option<syn::Error>,
}

impl<'a> Visit<'a> for RecordVisitor<'a> {
    fn visit_derive_input(&mut self, i: &'a DeriveInput) {
        if let Err(e) = self.collect_fields(i) {
            self.push_error(e);
        }
    }
}

impl<'a> RecordVisitor<'a> {
    fn collect_fields(&mut self, input: &'a DeriveInput) -> syn::Result<()> {
        let fields = extract_fields(input)?;
        let rule = container_rename_rule(&input.attrs)?;
        let mut seen = HashSet::new();

        for field in &fields.named {
            let options = match field_options(&field.attrs) {
                Ok(options) => options,
                Err(e) => {
                    self.push_error(e);
                    continue;
                }
            };
            if options.skip || !(options.include || is_exposed(&field.vis)) {
                continue;
            }
            let Some(ident) = field.ident.as_ref() else {
                continue;
            };

            let unraw = ident.unraw().to_string();
            let name = match (options.rename, rule) {
                (Some(rename), _) => rename,
                (None, Some(rule)) => rule.apply(&unraw),
                (None, None) => unraw,
            };
            if !seen.insert(name.clone()) {
                self.push_error(FieldwiseDeriveError::DuplicateName(name).at(ident.span()));
                continue;
            }

            self.fields.push(ExposedField {
                ident,
                name,
            });
        }
        Ok(())
    }

    fn push_error(&mut self, error: syn::Error) {
        match &mut self.error {
            Some(existing) => existing.combine(error),
            None => self.error = Some(error),
        }
    }
}
