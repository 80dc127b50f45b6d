//! Procedural macros used internally by the `htuple` crate to generate the impls which cannot be
//! written once, generically, over every arity.
//!
//! Both macros take a single integer literal, the inclusive upper bound of what to generate, and
//! expand to items which refer to names expected to be in scope at the invocation site.

extern crate proc_macro;

use {proc_macro::TokenStream, syn::parse_macro_input, syn::LitInt};

mod sequence;
mod unary;

/// Generate a `ToUnary` impl relating `Number<N>` to its unary representation, for every `N` from
/// zero up to and including the given bound.
///
/// Expects `S`, `Z`, `Number` and `ToUnary` to be in scope.
#[proc_macro]
pub fn generate_unary_conversion_impls(input: TokenStream) -> TokenStream {
    let max = parse_macro_input!(input as LitInt);
    match max.base10_parse::<usize>() {
        Ok(max) => unary::conversion_impls(max).into(),
        Err(e) => e.to_compile_error().into(),
    }
}

/// Generate the `Sequence`, `List`, `FromValues` and `TryFromValues` impls for every flat tuple
/// from the empty tuple up to and including the given arity.
///
/// Expects `Z`, `S`, `Slot`, `Sequence`, `List`, `FromValues`, `TryFromValues` and
/// `ConversionError` to be in scope.
#[proc_macro]
pub fn impl_sequences(input: TokenStream) -> TokenStream {
    let max = parse_macro_input!(input as LitInt);
    match max.base10_parse::<usize>() {
        Ok(max) => (0..=max)
            .map(sequence::impls_for_arity)
            .collect::<proc_macro2::TokenStream>()
            .into(),
        Err(e) => e.to_compile_error().into(),
    }
}
