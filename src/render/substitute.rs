//! Variable substitution over a markup fragment.

use super::types::VariableMap;

/// Replace `{{name}}` placeholder tokens in a markup fragment.
///
/// Entries are processed in the map's insertion order. Each entry runs a
/// single global pass: every occurrence of the literal token `{{name}}` is
/// replaced with the entry's value. Tokens whose name has no entry are left
/// untouched.
///
/// Because each pass operates on the output of the previous one, a
/// replacement value that itself contains a token matching a *later* entry
/// is substituted again in that later pass. This cascading is kept for
/// compatibility with the sequential-replace contract; values containing
/// `{{...}}`-shaped text will be rewritten by later passes.
///
/// Values are inserted as raw text. No HTML escaping is applied; any
/// sanitization policy belongs to the caller, applied to values before
/// they are passed in.
pub fn substitute_variables(markup: &str, variables: &VariableMap) -> String {
    let mut result = markup.to_string();

    for (name, value) in variables.iter() {
        let token = format!("{{{{{}}}}}", name);
        result = result.replace(&token, value);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitute_single_occurrence() {
        let variables = VariableMap::from([("name", "World")]);
        let result = substitute_variables("Hello, {{name}}!", &variables);
        assert_eq!(result, "Hello, World!");
    }

    #[test]
    fn test_substitute_multiple_keys() {
        let variables = VariableMap::from([("order_id", "ORD-123"), ("carrier", "FedEx")]);
        let result = substitute_variables(
            "Order {{order_id}} is being delivered by {{carrier}}",
            &variables,
        );
        assert_eq!(result, "Order ORD-123 is being delivered by FedEx");
    }

    #[test]
    fn test_substitute_is_global_per_key() {
        let variables = VariableMap::from([("x", "Y")]);
        let result = substitute_variables("{{x}} and {{x}}", &variables);
        assert_eq!(result, "Y and Y");
    }

    #[test]
    fn test_missing_key_left_untouched() {
        let result = substitute_variables("{{missing}}", &VariableMap::new());
        assert_eq!(result, "{{missing}}");
    }

    #[test]
    fn test_unmatched_keys_ignored() {
        let variables = VariableMap::from([("unused", "value")]);
        let result = substitute_variables("static text", &variables);
        assert_eq!(result, "static text");
    }

    #[test]
    fn test_cascading_substitution() {
        // A value containing a later key's token is itself substituted in
        // that later pass. Asserted as defined behavior, not guarded.
        let variables = VariableMap::from([("a", "{{b}}"), ("b", "Z")]);
        let result = substitute_variables("{{a}}", &variables);
        assert_eq!(result, "Z");
    }

    #[test]
    fn test_no_cascade_into_earlier_keys() {
        // The reverse order does not cascade: by the time `a` is replaced
        // with "{{b}}"-free text, the `b` pass has already run.
        let variables = VariableMap::from([("b", "Z"), ("a", "{{b}}")]);
        let result = substitute_variables("{{a}}", &variables);
        assert_eq!(result, "{{b}}");
    }

    #[test]
    fn test_values_inserted_without_escaping() {
        let variables = VariableMap::from([("content", "<b>&\"raw\"</b>")]);
        let result = substitute_variables("<p>{{content}}</p>", &variables);
        assert_eq!(result, "<p><b>&\"raw\"</b></p>");
    }

    #[test]
    fn test_partial_token_shapes_untouched() {
        let variables = VariableMap::from([("name", "Ada")]);
        let result = substitute_variables("{name} {{name} {{ name }}", &variables);
        assert_eq!(result, "{name} {{name} {{ name }}");
    }
}
