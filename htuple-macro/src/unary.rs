use {
    proc_macro2::{Literal, TokenStream},
    quote::quote,
};

/// The unary type for `n`: `Z` wrapped in `n` layers of `S<...>`.
pub fn unary_type(n: usize) -> TokenStream {
    (0..n).fold(quote!(Z), |inner, _| quote!(S<#inner>))
}

pub fn conversion_impls(max: usize) -> TokenStream {
    let mut impls = TokenStream::new();
    let mut unary = quote!(Z);
    for n in 0..=max {
        let constant = Literal::usize_unsuffixed(n);
        impls.extend(quote! {
            impl ToUnary for Number<#constant> {
                type AsUnary = #unary;
            }
        });
        unary = quote!(S<#unary>);
    }
    impls
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unary_type_nests_successors() {
        let zero = quote!(Z);
        let one = quote!(S<#zero>);
        let two = quote!(S<#one>);
        assert_eq!(unary_type(0).to_string(), zero.to_string());
        assert_eq!(unary_type(2).to_string(), two.to_string());
        assert_eq!(unary_type(2).to_string(), "S < S < Z > >");
    }

    #[test]
    fn conversion_impls_cover_bound_inclusively() {
        let generated = conversion_impls(3).to_string();
        assert_eq!(generated.matches("impl ToUnary").count(), 4);
        assert!(generated.contains(&quote!(Number<3>).to_string()));
    }
}
