use contracts::enums::ValidationStatus;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn StatusBadge(status: ValidationStatus) -> impl IntoView {
    let color = match status {
        ValidationStatus::Validated => BadgeColor::Success,
        ValidationStatus::Pending => BadgeColor::Warning,
        ValidationStatus::Rejected => BadgeColor::Danger,
    };
    view! {
        <Badge appearance=BadgeAppearance::Tint color=color>
            {status.display_name()}
        </Badge>
    }
}

/// Options for a status `<select>`; the empty value means no filter
pub fn status_options() -> Vec<(&'static str, &'static str)> {
    let mut options = vec![("", "Tous")];
    options.extend(
        ValidationStatus::all()
            .into_iter()
            .map(|status| (status.code(), status.display_name())),
    );
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_options_round_trip_codes() {
        let options = status_options();
        assert_eq!(options.len(), 4);
        assert_eq!(ValidationStatus::from_code(options[0].0), None);
        for (code, _) in &options[1..] {
            assert!(ValidationStatus::from_code(code).is_some());
        }
    }
}
