use contracts::shared::dates::{DateRange, DateRangePreset};
use leptos::prelude::*;
use thaw::*;

use crate::shared::date_utils::today;

/// Two date inputs plus quick presets (this week, last month, next month, reset)
#[component]
pub fn DateRangePicker(
    #[prop(into)]
    range: Signal<DateRange>,

    on_change: Callback<DateRange>,

    #[prop(optional)]
    label: Option<String>,
) -> impl IntoView {
    let on_start_input = move |value: String| {
        let current = range.get_untracked();
        on_change.run(DateRange::from_inputs(&value, &current.end_input()));
    };

    let on_end_input = move |value: String| {
        let current = range.get_untracked();
        on_change.run(DateRange::from_inputs(&current.start_input(), &value));
    };

    view! {
        <Flex vertical=true gap=FlexGap::Small>
            {label.map(|l| view! { <Label>{l}</Label> })}

            <Flex class="date-range-picker" align=FlexAlign::Center gap=FlexGap::Small>
                <input
                    type="date"
                    class="date-range-picker__input"
                    prop:value=move || range.with(|r| r.start_input())
                    on:input=move |ev| on_start_input(event_target_value(&ev))
                />
                <div>"—"</div>
                <input
                    type="date"
                    class="date-range-picker__input"
                    prop:value=move || range.with(|r| r.end_input())
                    on:input=move |ev| on_end_input(event_target_value(&ev))
                />
                <ButtonGroup>
                    {DateRangePreset::all().into_iter().map(|preset| view! {
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| on_change.run(preset.resolve(today()))
                        >
                            {preset.label()}
                        </Button>
                    }).collect_view()}
                </ButtonGroup>
            </Flex>
        </Flex>
    }
}
