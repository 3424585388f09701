//! Human-facing messages for route queries that come back empty.

use evacroute_lib::NotFoundReason;

/// Turn a not-found outcome into a sentence suitable for stderr.
pub fn format_not_found_message(reason: &NotFoundReason) -> String {
    match reason {
        NotFoundReason::UnknownLabel { label, suggestions } => {
            format_unknown_label_message(label, suggestions)
        }
        NotFoundReason::Unreachable { start, goal } => {
            format!(
                "No route found between {} and {}. Try --bidirectional if corridors can be walked both ways.",
                start, goal
            )
        }
        NotFoundReason::NoReachableExit { start } => {
            format!(
                "No exit is reachable from {}. Check the dataset for missing connections or try --bidirectional.",
                start
            )
        }
        NotFoundReason::BrokenPath { start, goal } => {
            format!(
                "Route from {} to {} could not be reconstructed; the graph is inconsistent.",
                start, goal
            )
        }
    }
}

/// Message for a label that is not present in the node catalog.
pub fn format_unknown_label_message(label: &str, suggestions: &[String]) -> String {
    let mut message = format!("Unknown location '{}'.", label);
    match suggestions {
        [] => {}
        [only] => {
            message.push_str(&format!(" Did you mean '{}'?", only));
        }
        many => {
            let joined = many
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ");
            message.push_str(&format!(" Did you mean one of: {}?", joined));
        }
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_label_without_suggestions() {
        assert_eq!(
            format_unknown_label_message("Aula_1", &[]),
            "Unknown location 'Aula_1'."
        );
    }

    #[test]
    fn unknown_label_with_single_suggestion() {
        let message = format_unknown_label_message("Aula_21", &["Aula_201".to_string()]);
        assert_eq!(message, "Unknown location 'Aula_21'. Did you mean 'Aula_201'?");
    }

    #[test]
    fn unknown_label_with_several_suggestions() {
        let suggestions = vec!["Aula_201".to_string(), "Aula_202".to_string()];
        let message = format_unknown_label_message("Aula_20", &suggestions);
        assert!(message.ends_with("Did you mean one of: 'Aula_201', 'Aula_202'?"));
    }

    #[test]
    fn unreachable_mentions_both_endpoints() {
        let message = format_not_found_message(&NotFoundReason::Unreachable {
            start: "Salida_A".to_string(),
            goal: "Aula_1".to_string(),
        });
        assert!(message.starts_with("No route found between Salida_A and Aula_1."));
    }

    #[test]
    fn no_exit_mentions_start() {
        let message = format_not_found_message(&NotFoundReason::NoReachableExit {
            start: "Deposito".to_string(),
        });
        assert!(message.starts_with("No exit is reachable from Deposito."));
    }
}
