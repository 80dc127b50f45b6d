use {
    proc_macro2::{Ident, Literal, TokenStream},
    quote::{format_ident, quote},
};

use crate::unary::unary_type;

/// All the impls relating the flat tuple of the given arity to its inductive list, its slot list,
/// and the tuples it can be converted from.
pub fn impls_for_arity(arity: usize) -> TokenStream {
    let types: Vec<Ident> = (0..arity).map(|i| format_ident!("T{}", i)).collect();
    let sources: Vec<Ident> = (0..arity).map(|i| format_ident!("U{}", i)).collect();
    let values: Vec<Ident> = (0..arity).map(|i| format_ident!("t{}", i)).collect();
    let slots: Vec<Ident> = (0..arity).map(|i| format_ident!("s{}", i)).collect();
    let positions: Vec<Literal> = (0..arity).map(Literal::usize_unsuffixed).collect();

    let flat = quote!((#(#types,)*));
    let source_flat = quote!((#(#sources,)*));

    // (T0, (T1, (..., ())))
    let list = types
        .iter()
        .rev()
        .fold(quote!(()), |tail, t| quote!((#t, #tail)));

    // The slot list is nested in reverse, so that the last position is outermost:
    // (Slot<Pn, Tn>, (..., (Slot<Z, T0>, ())))
    let mut slot_list = quote!(());
    let mut slot_expr = quote!(());
    let mut slot_pat = quote!(());
    for (i, ((t, v), s)) in types.iter().zip(&values).zip(&slots).enumerate() {
        let position = unary_type(i);
        slot_list = quote!((Slot<#position, #t>, #slot_list));
        slot_expr = quote!((Slot::new(#v), #slot_expr));
        slot_pat = quote!((#s, #slot_pat));
    }

    quote! {
        impl<#(#types,)*> List for #list {
            type AsTuple = #flat;
        }

        #[allow(clippy::unused_unit, clippy::let_unit_value)]
        impl<#(#types,)*> Sequence for #flat {
            type AsList = #list;
            type Slots = #slot_list;

            fn into_slots(self) -> Self::Slots {
                let (#(#values,)*) = self;
                #slot_expr
            }

            fn from_slots(slots: Self::Slots) -> Self {
                let #slot_pat = slots;
                (#(#slots.into_inner(),)*)
            }
        }

        #[allow(clippy::unused_unit, clippy::let_unit_value)]
        impl<#(#types,)* #(#sources,)*> FromValues<#source_flat> for #flat
        where
            #(#sources: Into<#types>,)*
        {
            fn from_values(values: #source_flat) -> Self {
                let (#(#values,)*) = values;
                (#(#values.into(),)*)
            }
        }

        #[allow(clippy::unused_unit, clippy::let_unit_value)]
        impl<#(#types,)* #(#sources,)*> TryFromValues<#source_flat> for #flat
        where
            #(
                #sources: ::core::convert::TryInto<#types>,
                <#sources as ::core::convert::TryInto<#types>>::Error:
                    ::std::error::Error + Send + Sync + 'static,
            )*
        {
            fn try_from_values(values: #source_flat) -> Result<Self, ConversionError> {
                let (#(#values,)*) = values;
                Ok((#(
                    ::core::convert::TryInto::try_into(#values)
                        .map_err(|e| ConversionError::new(#positions, e))?,
                )*))
            }
        }
    }
}
