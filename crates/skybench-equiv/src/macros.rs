/// Implements [`Inspect`](crate::Inspect) for plain structs by listing their
/// fields. A field whose serialized name differs from its Rust name takes an
/// `as "name"` suffix. Every field must be listed.
///
/// ```ignore
/// inspect_record! {
///     Equipment as "Equipment" { code, kind as "type", name }
/// }
/// ```
#[macro_export]
macro_rules! inspect_record {
    (@name $field:ident) => {
        stringify!($field)
    };
    (@name $field:ident $external:literal) => {
        $external
    };
    ($($ty:ty as $type_name:literal { $($field:ident $(as $external:literal)?),* $(,)? })*) => {
        $(
            impl $crate::Inspect for $ty {
                fn shape(&self) -> $crate::Shape<'_> {
                    let Self { $($field),* } = self;
                    $crate::Shape::Record($crate::Record::new(
                        $type_name,
                        vec![$(
                            $crate::Field {
                                name: $crate::inspect_record!(@name $field $($external)?),
                                value: $crate::Inspect::shape($field),
                            },
                        )*],
                    ))
                }
            }
        )*
    };
}
