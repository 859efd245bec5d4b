use heck::ToSnakeCase;

/// Default table name for a model: the snake_case struct name with its last
/// word pluralized (`TestModel` -> `test_models`).
pub(crate) fn table_name(ident: &syn::Ident) -> String {
    let snake = ident.to_string().to_snake_case();

    match snake.rsplit_once('_') {
        Some((prefix, last)) => format!("{prefix}_{}", pluralizer::pluralize(last, 2, false)),
        None => pluralizer::pluralize(&snake, 2, false),
    }
}
