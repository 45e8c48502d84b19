/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

// Defines a string-backed enum that keeps values it does not recognize.
macro_rules! string_enum {
    (
        $(#[$m:meta])*
        pub enum $name:ident {
            $(
                $(#[$vm:meta])*
                $variant:ident => $value:literal,
            )+
        }
    ) => {
        $(#[$m])*
        ///
        /// Values this version of the model does not know are kept in [`Unknown`](Self::Unknown)
        /// with their original text. Match on [`as_str`](Self::as_str) instead of the variant to
        /// handle them.
        #[non_exhaustive]
        #[derive(
            ::std::clone::Clone,
            ::std::fmt::Debug,
            ::std::cmp::Eq,
            ::std::hash::Hash,
            ::std::cmp::Ord,
            ::std::cmp::PartialEq,
            ::std::cmp::PartialOrd,
        )]
        pub enum $name {
            $(
                $(#[$vm])*
                #[allow(missing_docs)]
                $variant,
            )+
            /// `Unknown` contains new variants that have been added since this code was generated.
            Unknown(crate::primitives::UnknownVariantValue),
        }

        impl ::std::convert::From<&str> for $name {
            fn from(s: &str) -> Self {
                match s {
                    $($value => $name::$variant,)+
                    other => {
                        ::tracing::trace!(value = other, enum_name = stringify!($name), "unknown enum value");
                        $name::Unknown(crate::primitives::UnknownVariantValue(other.to_owned()))
                    }
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;

            fn from_str(s: &str) -> ::std::result::Result<Self, <Self as ::std::str::FromStr>::Err> {
                ::std::result::Result::Ok($name::from(s))
            }
        }

        impl $name {
            /// Returns the `&str` value of the enum member.
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $value,)+
                    $name::Unknown(value) => value.as_str(),
                }
            }

            /// Returns all the `&str` representations of the enum members.
            pub const fn values() -> &'static [&'static str] {
                &[$($value),+]
            }
        }

        impl ::std::convert::AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}
