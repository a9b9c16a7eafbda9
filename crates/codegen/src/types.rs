//! Field type inspection.

use syn::{GenericArgument, PathArguments, Type};

/// Returns `T` for `Option<T>` (also `std::option::Option<T>`).
pub fn option_inner(ty: &Type) -> Option<&Type> {
    if let Type::Path(type_path) = ty
        && type_path.qself.is_none()
        && let Some(segment) = type_path.path.segments.last()
        && segment.ident == "Option"
        && let PathArguments::AngleBracketed(args) = &segment.arguments
        && args.args.len() == 1
        && let Some(GenericArgument::Type(inner)) = args.args.first()
    {
        return Some(inner);
    }

    None
}

/// The type a value must convert to: `T` for `Option<T>`, else the type
/// itself.
pub fn value_type(ty: &Type) -> &Type {
    option_inner(ty).unwrap_or(ty)
}
