// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Declarative macros for reducing boilerplate.
//!
//! - [`simple_display!`]: `Display` impl mapping enum variants to string literals
//! - [`setters!`]: in-place setter methods for configuration structs

/// Generate a `Display` impl that maps enum variants to string literals.
///
/// Unit variants match directly; data-carrying variants use `(..)` to ignore fields.
///
/// ```ignore
/// crate::simple_display! {
///     MyEnum {
///         Foo => "foo",
///         Bar(..) => "bar",
///     }
/// }
/// ```
#[macro_export]
macro_rules! simple_display {
    ($enum:ty { $( $variant:ident $(( $($ignore:tt)* ))? => $str:expr ),+ $(,)? }) => {
        impl std::fmt::Display for $enum {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(match self {
                    $( Self::$variant $(( $($ignore)* ))? => $str, )+
                })
            }
        }
    };
}

/// Generate in-place setter methods inside an existing `impl` block.
///
/// Setters are last-write-wins and return `&mut Self` for chaining.
///
/// Field groups:
/// - `into { setter => field: Type }`: setter takes `impl Into<Type>`
/// - `set { setter => field: Type }`: setter takes `Type` directly
///
/// ```ignore
/// impl MyConfig {
///     jd_core::setters! {
///         into { set_name => name: String }
///         set { set_ports => ports: Vec<u16> }
///     }
/// }
/// ```
#[macro_export]
macro_rules! setters {
    (
        $(into {
            $( $into_setter:ident => $into_field:ident : $into_ty:ty ),* $(,)?
        })?
        $(set {
            $( $set_setter:ident => $set_field:ident : $set_ty:ty ),* $(,)?
        })?
    ) => {
        $($(
            pub fn $into_setter(&mut self, v: impl Into<$into_ty>) -> &mut Self {
                self.$into_field = v.into();
                self
            }
        )*)?

        $($(
            pub fn $set_setter(&mut self, v: $set_ty) -> &mut Self {
                self.$set_field = v;
                self
            }
        )*)?
    };
}
