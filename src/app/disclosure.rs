use leptos::prelude::*;

/// Open/closed flag for a single [`Section`] instance.
///
/// Two states, both valid indefinitely. Every section starts open and
/// only its own header button ever flips it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Open,
    Closed,
}

impl Visibility {
    pub fn toggle(&mut self) {
        *self = match self {
            Visibility::Open => Visibility::Closed,
            Visibility::Closed => Visibility::Open,
        };
    }

    pub fn is_open(self) -> bool {
        matches!(self, Visibility::Open)
    }
}

/// Titled block of content the viewer can show or hide.
///
/// The body is rendered once and collapsed with classes rather than
/// unmounted, so child state survives a close/reopen cycle.
#[component]
pub fn Section(#[prop(into)] title: String, children: Children) -> impl IntoView {
    let (visibility, set_visibility) = signal(Visibility::default());

    view! {
        <section class="mb-8 bg-brightBlack/20 rounded-xl overflow-hidden shadow-lg section-content">
            <button
                class="w-full flex items-center justify-between py-4 px-6 text-left"
                on:click=move |_| set_visibility.update(Visibility::toggle)
            >
                <span class="text-xl font-semibold">{title}</span>
                <span class=move || {
                    if visibility().is_open() {
                        "transition-transform duration-300 rotate-90"
                    } else {
                        "transition-transform duration-300"
                    }
                }>"❯"</span>
            </button>
            <div class=move || {
                if visibility().is_open() {
                    "max-h-[4000px] opacity-100 transition-all duration-300"
                } else {
                    "max-h-0 opacity-0 overflow-hidden transition-all duration-300"
                }
            }>
                <div class="p-6">{children()}</div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_open() {
        assert_eq!(Visibility::default(), Visibility::Open);
        assert!(Visibility::default().is_open());
    }

    #[test]
    fn test_toggle_alternates_states() {
        let mut v = Visibility::default();
        v.toggle();
        assert_eq!(v, Visibility::Closed);
        assert!(!v.is_open());
        v.toggle();
        assert_eq!(v, Visibility::Open);
    }

    #[test]
    fn test_toggle_parity() {
        // After n toggles a section is open iff n is even
        for n in 0..=16 {
            let mut v = Visibility::default();
            for _ in 0..n {
                v.toggle();
            }
            assert_eq!(v.is_open(), n % 2 == 0, "wrong state after {n} toggles");
        }
    }

    #[test]
    fn test_sections_toggle_independently() {
        // Each section owns its own flag; flipping one never touches another
        let mut about = Visibility::default();
        let mut experience = Visibility::default();

        about.toggle();
        assert_eq!(about, Visibility::Closed);
        assert_eq!(experience, Visibility::Open);

        experience.toggle();
        experience.toggle();
        assert_eq!(about, Visibility::Closed);
        assert_eq!(experience, Visibility::Open);
    }
}
