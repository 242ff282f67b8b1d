/// Declares concrete objects. The string after the name is the object's `@type`.
macro_rules! variants {
    ($(
        $(#[$meta:meta])*
        pub struct $name:ident : $tag:tt { $($body:tt)* }
    )*) => {$(
        #[derive(::serde::Serialize, ::serde::Deserialize)]
        #[serde(remote = "Self", tag = "@type", rename = $tag)]
        #[derive(Clone, Debug, PartialEq)]
        $(#[$meta])*
        pub struct $name { $($body)* }
        tagged_serde!($name, $tag);

        impl $crate::Variant for $name {
            const TYPE: &'static str = $tag;
        }
        impl $crate::Object for $name {
            fn from_envelope(envelope: &$crate::Envelope) -> $crate::Result<Self> {
                $crate::codec::decode_variant(envelope)
            }
        }
    )*};
}

/// Declares a family enum with one tuple variant per concrete object.
///
/// The enum, its registry and its discriminator dispatch all come from this single list.
macro_rules! family {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident($ty:ty),)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        pub enum $name {
            $($(#[$vmeta])* $variant($ty),)+
        }

        $(
            impl From<$ty> for $name {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )+

        impl $crate::Family for $name {
            const NAME: &'static str = stringify!($name);

            fn registry() -> &'static $crate::Registry<Self> {
                static REGISTRY: ::std::sync::LazyLock<$crate::Registry<$name>> =
                    ::std::sync::LazyLock::new(|| {
                        $crate::Registry::<$name>::builder()
                            $(.register::<$ty>())+
                            .build()
                            .unwrap_or_else(|e| panic!("{e}"))
                    });
                &REGISTRY
            }
            fn discriminator(&self) -> &'static str {
                match self {
                    $(Self::$variant(_) => <$ty as $crate::Variant>::TYPE,)+
                }
            }
        }
        impl $crate::Object for $name {
            fn from_envelope(envelope: &$crate::Envelope) -> $crate::Result<Self> {
                $crate::codec::decode_family(envelope)
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, s: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                match self {
                    $(Self::$variant(value) => ::serde::Serialize::serialize(value, s),)+
                }
            }
        }
        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(d: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                $crate::codec::deserialize_family(d)
            }
        }
    };
}

/// Declares request objects and the type each one returns.
macro_rules! functions {
    ($(
        $(#[$meta:meta])*
        pub struct $name:ident : $tag:tt -> $ret:ty { $($body:tt)* }
    )*) => {$(
        #[derive(::serde::Serialize, ::serde::Deserialize)]
        #[serde(remote = "Self", tag = "@type", rename = $tag)]
        #[derive(Clone, Debug, PartialEq)]
        $(#[$meta])*
        pub struct $name { $($body)* }
        tagged_serde!($name, $tag);

        impl $crate::Function for $name {
            const TYPE: &'static str = $tag;
            type Return = $ret;
        }
    )*};
}

// With `remote = "Self"` the derives above become inherent functions. The trait impls
// wrap them, so a nested object is rejected unless its `@type` is the declared tag.
macro_rules! tagged_serde {
    ($name:ident, $tag:tt) => {
        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, s: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                $name::serialize(self, s)
            }
        }
        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(d: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                $crate::codec::deserialize_variant(d, $tag, |fields| $name::deserialize(fields))
            }
        }
    };
}
