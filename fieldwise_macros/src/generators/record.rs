use proc_macro2::TokenStream;
use quote::quote;
use syn::{GenericParam, Generics, Ident, parse_quote};

use crate::visitors::record_visitor::RecordVisitor;

/// Generates the `Reflect` and `Record` impls for one struct.
pub struct RecordGenerator<'a> {
    name: &'a Ident,
    generics: Generics,
    visitor: &'a RecordVisitor<'a>,
}

impl<'a> RecordGenerator<'a> {
    pub fn new(name: &'a Ident, generics: &Generics, visitor: &'a RecordVisitor<'a>) -> Self {
        Self {
            name,
            generics: Self::bounded_generics(generics),
            visitor,
        }
    }

    /// Every type parameter must itself be reflectable and cloneable for the
    /// struct to be.
    fn bounded_generics(generics: &Generics) -> Generics {
        let mut generics = generics.clone();
        for param in &mut generics.params {
            if let GenericParam::Type(ty) = param {
                ty.bounds.push(parse_quote!(::fieldwise::Reflect));
                ty.bounds.push(parse_quote!(::core::clone::Clone));
            }
        }
        generics
    }

    pub fn generate(&self) -> TokenStream {
        let reflect = self.generate_reflect_impl();
        let record = self.generate_record_impl();
        quote! {
            #reflect
            #record
        }
    }

    fn generate_reflect_impl(&self) -> TokenStream {
        let name = self.name;
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();

        quote! {
            impl #impl_generics ::fieldwise::Reflect for #name #ty_generics #where_clause {
                fn reflect_ref(&self) -> ::fieldwise::ValueRef<'_> {
                    ::fieldwise::ValueRef::Record(self)
                }

                fn reflect_mut(&mut self) -> ::fieldwise::ValueMut<'_> {
                    ::fieldwise::ValueMut::Record(self)
                }
            }
        }
    }

    fn generate_record_impl(&self) -> TokenStream {
        let name = self.name;
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();

        let names: Vec<_> = self.visitor.fields.iter().map(|f| f.name.as_str()).collect();
        let idents: Vec<_> = self.visitor.fields.iter().map(|f| f.ident).collect();

        quote! {
            impl #impl_generics ::fieldwise::Record for #name #ty_generics #where_clause {
                fn fields(&self) -> &'static [::fieldwise::FieldDescriptor] {
                    const FIELDS: &[::fieldwise::FieldDescriptor] = &[
                        #(::fieldwise::FieldDescriptor::new(#names)),*
                    ];
                    FIELDS
                }

                fn field(&self, name: &str) -> ::core::option::Option<&dyn ::fieldwise::Reflect> {
                    match name {
                        #(#names => ::core::option::Option::Some(&self.#idents as &dyn ::fieldwise::Reflect),)*
                        _ => ::core::option::Option::None,
                    }
                }

                fn field_mut(
                    &mut self,
                    name: &str,
                ) -> ::core::option::Option<&mut dyn ::fieldwise::Reflect> {
                    match name {
                        #(#names => ::core::option::Option::Some(&mut self.#idents as &mut dyn ::fieldwise::Reflect),)*
                        _ => ::core::option::Option::None,
                    }
                }
            }
        }
    }
}
