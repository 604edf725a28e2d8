// src/services/filter.rs

// Predicados puros usados por todas as listagens. Nada aqui é memoizado:
// cada chamada recalcula sobre a coleção recebida.

// Busca textual: consulta vazia não filtra; caso contrário, substring
// sem diferenciar maiúsculas sobre os campos designados da view.
pub fn text_match(query: &str, fields: &[&str]) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    fields.iter().any(|field| field.to_lowercase().contains(&needle))
}

// Seletor de estado/categoria: `None` é o sentinela "todos".
pub fn selector_match<T: PartialEq>(selected: Option<T>, value: T) -> bool {
    selected.map_or(true, |wanted| wanted == value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::project::ProjectStatus;

    #[test]
    fn empty_query_matches_everything() {
        assert!(text_match("", &["Edificio Residencial Los Pinos"]));
        assert!(text_match("", &[]));
    }

    #[test]
    fn query_is_case_insensitive_substring() {
        assert!(text_match("pinos", &["Edificio Residencial Los Pinos"]));
        assert!(text_match("PINOS", &["Edificio Residencial Los Pinos"]));
        assert!(!text_match("norte", &["Edificio Residencial Los Pinos"]));
    }

    #[test]
    fn query_matches_any_designated_field() {
        let fields = ["Banco Principal", "Proveedor Cementos"];
        assert!(text_match("cementos", &fields));
        assert!(text_match("banco", &fields));
        assert!(!text_match("planilla", &fields));
    }

    #[test]
    fn none_selector_is_the_all_sentinel() {
        assert!(selector_match(None, ProjectStatus::Active));
        assert!(selector_match(None, ProjectStatus::Closed));
    }

    #[test]
    fn some_selector_requires_equality() {
        assert!(selector_match(Some(ProjectStatus::Active), ProjectStatus::Active));
        assert!(!selector_match(Some(ProjectStatus::Active), ProjectStatus::Closed));
    }
}
