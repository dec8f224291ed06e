// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Closed sets of string values used in request models.

/// Defines an enum whose variants map to fixed wire names.
///
/// The enum gets `name()`, `Display`, `FromStr` and a conversion into
/// `String`, so setters taking `Into<String>` accept the enum directly.
///
/// ```
/// cloud_sdk_gax_internal::string_enum!(
///     /// The color of a widget.
///     Color {
///         Red => "RED",
///         DarkBlue => "DARK_BLUE",
///     }
/// );
/// assert_eq!(Color::DarkBlue.name(), "DARK_BLUE");
/// assert_eq!("RED".parse::<Color>(), Ok(Color::Red));
/// ```
#[macro_export]
macro_rules! string_enum {
    ($(#[$meta:meta])* $name:ident { $($(#[$vmeta:meta])* $variant:ident => $wire:literal,)* }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[non_exhaustive]
        pub enum $name {
            $($(#[$vmeta])* $variant,)*
        }

        impl $name {
            /// The name of the value on the wire.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)*
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.name().to_string()
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;
            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(Self::$variant),)*
                    _ => Err(format!("`{s}` is not a valid {}", stringify!($name))),
                }
            }
        }
    };
}
