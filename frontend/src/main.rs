use budget_hooks::hooks::{CounterAnimation, HookRegistry, ProgressAnimation, TooltipHover};
use budget_hooks::services::logging::Logger;
use budget_hooks::MountedHook;
use shared::HookConfig;
use web_sys::HtmlElement;
use yew::prelude::*;

// Mount a registered behavior on the element behind `node`, if it rendered
fn mount_on(registry: &HookRegistry, config: &HookConfig, name: &str, node: &NodeRef) -> Option<MountedHook> {
    let el = node.cast::<HtmlElement>()?;
    let hook = registry.create(name, config)?;
    Some(MountedHook::attach(name, el, hook))
}

fn next_percentage(current: f64) -> f64 {
    let next = current + 17.5;
    if next > 120.0 { 0.0 } else { next }
}

#[function_component(Preview)]
fn preview() -> Html {
    let counter_ref = use_node_ref();
    let tooltip_ref = use_node_ref();
    let progress_ref = use_node_ref();
    let percentage = use_state(|| 42.5f64);
    let mounted = use_mut_ref(Vec::<MountedHook>::new);
    let first_render = use_mut_ref(|| true);

    // Mount every behavior once and tear them down with the component
    {
        let mounted = mounted.clone();
        let targets = [
            (CounterAnimation::NAME, counter_ref.clone()),
            (TooltipHover::NAME, tooltip_ref.clone()),
            (ProgressAnimation::NAME, progress_ref.clone()),
        ];

        use_effect_with((), move |_| {
            let registry = HookRegistry::with_defaults();
            let config = HookConfig::default();
            Logger::set_level(config.log_level);

            *mounted.borrow_mut() = targets
                .iter()
                .filter_map(|(name, node)| mount_on(&registry, &config, name, node))
                .collect();
            Logger::info_with_component("preview", &format!("mounted {} hooks", mounted.borrow().len()));

            move || mounted.borrow_mut().clear()
        });
    }

    // Re-rendered percentage goes through the `updated` path
    {
        let mounted = mounted.clone();
        let first_render = first_render.clone();
        use_effect_with(*percentage, move |_| {
            if std::mem::replace(&mut *first_render.borrow_mut(), false) {
                return;
            }
            for hook in mounted.borrow_mut().iter_mut() {
                if hook.name() == ProgressAnimation::NAME {
                    hook.updated();
                }
            }
        });
    }

    let on_bump = {
        let percentage = percentage.clone();
        Callback::from(move |_: MouseEvent| percentage.set(next_percentage(*percentage)))
    };

    html! {
        <main class="max-w-xl mx-auto p-8 space-y-10">
            <section ref={counter_ref} data-value="1234567" class="text-4xl font-bold">
                <span id="budget-amount">{"$0.00"}</span>
            </section>

            <section>
                <span ref={tooltip_ref} data-tooltip="Remaining budget for this month" class="underline cursor-help">
                    {"Hover me"}
                </span>
            </section>

            <section ref={progress_ref} data-percentage={percentage.to_string()} class="w-full h-3 bg-gray-200 rounded-full cursor-pointer">
                <div class="progress-fill h-3 bg-green-500 rounded-full"></div>
            </section>

            <button onclick={on_bump} class="px-4 py-2 bg-gray-900 text-white rounded-lg">
                {format!("Set progress ({}%)", next_percentage(*percentage))}
            </button>
        </main>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<Preview>::new().render();
}
