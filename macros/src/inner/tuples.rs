//! Tuple impl generation macro.

use proc_macro2::{Literal, TokenStream};
use quote::quote;
use syn::{parse::Parse, parse::ParseStream, LitInt};

use crate::common::call_site_ident;

pub struct TuplesInput {
    pub max: usize,
}

impl Parse for TuplesInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lit: LitInt = input.parse()?;
        let max = lit.base10_parse::<usize>()?;
        Ok(TuplesInput { max })
    }
}

/// `Sealed`, `Tuple` and every `TupleElement<N>` for arities `0..=max`.
///
/// Expects `sealed::Sealed`, `Tuple` and `TupleElement` in scope.
pub fn expand_tuples(input: TuplesInput) -> TokenStream {
    let mut impls = Vec::new();

    for arity in 0..=input.max {
        let params: Vec<_> = (0..arity).map(|i| call_site_ident(&format!("T{}", i))).collect();
        let tuple = quote! { (#(#params,)*) };
        let arity_lit = Literal::usize_unsuffixed(arity);

        impls.push(quote! {
            impl<#(#params),*> sealed::Sealed for #tuple {}
            impl<#(#params),*> Tuple for #tuple {
                const ARITY: usize = #arity_lit;
            }
        });

        for (index, param) in params.iter().enumerate() {
            let index_lit = Literal::usize_unsuffixed(index);
            impls.push(quote! {
                impl<#(#params),*> TupleElement<#index_lit> for #tuple {
                    type Out = #param;
                }
            });
        }
    }

    quote! { #(#impls)* }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let out = expand_tuples(TuplesInput { max: 3 }).to_string().replace(' ', "");
        // 4 arities, 0 + 1 + 2 + 3 element impls.
        assert_eq!(out.matches("impl").count(), 4 * 2 + 6);
        assert!(out.contains("TupleElement<2>for(T0,T1,T2,){typeOut=T2;}"));
    }
}
