//! Page CSS, injected as a `<style>` tag at mount.
//!
//! Light theme variables live on `:root`; the dark palette overrides them
//! under `[data-theme="dark"]`, the attribute `util::theme::apply` writes on
//! the `<html>` element. Components reference the custom properties only, so
//! theme switching never touches component markup.

/// Complete stylesheet for the landing page.
pub const PAGE_CSS: &str = r#"
:root {
    --bg: #ffffff;
    --bg-soft: #f8fafc;
    --bg-card: #ffffff;
    --text: #0f172a;
    --text-muted: #475569;
    --text-faint: #64748b;
    --border: #e2e8f0;
    --border-soft: rgba(226, 232, 240, 0.5);
    --accent-from: #06b6d4;
    --accent-to: #2563eb;
    --accent: #0891b2;
    --button-bg: #0f172a;
    --button-fg: #ffffff;
    --whatsapp: #16a34a;
    --shadow: 0 1px 2px rgba(15, 23, 42, 0.06);
    --shadow-lg: 0 18px 40px rgba(15, 23, 42, 0.12);
    --glow: rgba(56, 189, 248, 0.25);
    --container-max: 80rem;
}

[data-theme="dark"] {
    --bg: #020617;
    --bg-soft: rgba(15, 23, 42, 0.4);
    --bg-card: #020617;
    --text: #f1f5f9;
    --text-muted: #cbd5e1;
    --text-faint: #94a3b8;
    --border: #1e293b;
    --border-soft: #1e293b;
    --button-bg: #ffffff;
    --button-fg: #0f172a;
    --shadow: 0 1px 2px rgba(0, 0, 0, 0.4);
    --shadow-lg: 0 18px 40px rgba(0, 0, 0, 0.5);
    --glow: rgba(56, 189, 248, 0.12);
}

*, *::before, *::after {
    box-sizing: border-box;
}

body {
    margin: 0;
    min-height: 100vh;
    background: var(--bg);
    color: var(--text);
    font-family: ui-sans-serif, system-ui, -apple-system, "Segoe UI", sans-serif;
    line-height: 1.6;
}

a {
    color: inherit;
    text-decoration: none;
}

/* Buttons */
.btn {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    border-radius: 0.75rem;
    padding: 0.75rem 1.25rem;
    font-size: 0.875rem;
    font-weight: 600;
    cursor: pointer;
    transition: opacity 0.15s ease, background 0.15s ease;
}

.btn--primary {
    background: var(--button-bg);
    color: var(--button-fg);
    border: none;
}

.btn--primary:hover {
    opacity: 0.9;
}

.btn--ghost {
    background: transparent;
    color: var(--text);
    border: 1px solid var(--border);
}

.btn--ghost:hover {
    background: var(--bg-soft);
}

.btn--whatsapp {
    background: var(--whatsapp);
    color: #ffffff;
    border: none;
}

.btn--whatsapp:hover {
    opacity: 0.9;
}

/* Header */
.header {
    position: sticky;
    top: 0;
    z-index: 50;
    width: 100%;
    border-bottom: 1px solid var(--border-soft);
    background: color-mix(in srgb, var(--bg) 80%, transparent);
    backdrop-filter: blur(12px);
}

.header__inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 0.75rem 1.5rem;
    max-width: var(--container-max);
    margin: 0 auto;
}

.header__brand {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    font-size: 1.25rem;
    font-weight: 700;
    letter-spacing: -0.02em;
}

.header__logo {
    display: grid;
    place-items: center;
    width: 2rem;
    height: 2rem;
    border-radius: 0.75rem;
    background: linear-gradient(135deg, var(--accent-from), var(--accent-to));
    color: #ffffff;
    font-size: 1rem;
}

.header__nav {
    display: flex;
    align-items: center;
    gap: 1.5rem;
}

.header__nav-link {
    font-size: 0.875rem;
    font-weight: 500;
    color: var(--text-muted);
    transition: color 0.15s ease;
}

.header__nav-link:hover {
    color: var(--text);
}

.header__theme-toggle {
    margin-left: 0.25rem;
    border: 1px solid var(--border);
    border-radius: 0.75rem;
    background: transparent;
    color: var(--text);
    padding: 0.5rem 0.75rem;
    font-size: 0.875rem;
    cursor: pointer;
}

.header__theme-toggle:hover {
    background: var(--bg-soft);
}

.header__mobile-controls {
    display: none;
    align-items: center;
    gap: 0.5rem;
}

.header__menu-toggle {
    border: 1px solid var(--border);
    border-radius: 0.75rem;
    background: transparent;
    color: var(--text);
    padding: 0.5rem 0.75rem;
    font-size: 1rem;
    cursor: pointer;
}

.header__mobile-panel {
    display: none;
    border-top: 1px solid var(--border);
    background: var(--bg);
    padding: 0.75rem 1.5rem;
}

.header__mobile-panel .header__nav-link {
    display: block;
    padding: 0.25rem 0;
}

/* Hero */
.hero {
    position: relative;
    overflow: hidden;
    background: radial-gradient(1250px 650px at 50% -200px, var(--glow), transparent);
}

.hero__inner {
    display: grid;
    gap: 2.5rem;
    align-items: center;
    padding: 5rem 1.5rem;
    max-width: var(--container-max);
    margin: 0 auto;
}

.hero__badge {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    border: 1px solid var(--border);
    border-radius: 9999px;
    background: var(--bg-soft);
    padding: 0.25rem 0.75rem;
    font-size: 0.75rem;
    font-weight: 500;
    color: var(--text-muted);
    box-shadow: var(--shadow);
}

.hero__title {
    margin: 1rem 0 0;
    font-size: 2.5rem;
    font-weight: 800;
    letter-spacing: -0.03em;
    line-height: 1.15;
}

.hero__title-accent {
    background: linear-gradient(90deg, var(--accent-from), var(--accent-to));
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.hero__lead {
    margin-top: 1rem;
    max-width: 36rem;
    color: var(--text-muted);
}

.hero__actions {
    margin-top: 1.5rem;
    display: flex;
    flex-wrap: wrap;
    gap: 0.75rem;
}

.hero__chips {
    margin-top: 2rem;
    display: flex;
    align-items: center;
    gap: 1.5rem;
    font-size: 0.875rem;
    color: var(--text-faint);
}

.hero__chip {
    display: flex;
    align-items: center;
    gap: 0.5rem;
}

.hero__mock {
    position: relative;
    margin: 0 auto;
    width: 100%;
    max-width: 36rem;
    aspect-ratio: 16 / 9;
    overflow: hidden;
    border: 1px solid var(--border);
    border-radius: 1.5rem;
    box-shadow: var(--shadow-lg);
    display: grid;
    place-items: center;
    background: var(--bg-soft);
}

.hero__mock-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 1rem;
    padding: 1.5rem;
}

.hero__tile {
    display: flex;
    flex-direction: column;
    align-items: center;
    border: 1px solid var(--border);
    border-radius: 1rem;
    background: var(--bg-card);
    padding: 1rem;
    box-shadow: var(--shadow);
}

.hero__tile-icon {
    font-size: 1.5rem;
}

.hero__tile-label {
    margin-top: 0.5rem;
    font-size: 0.75rem;
    font-weight: 500;
    color: var(--text-muted);
}

/* Trust bar */
.trust-bar {
    border-top: 1px solid var(--border-soft);
    border-bottom: 1px solid var(--border-soft);
    background: var(--bg-soft);
}

.trust-bar__line {
    margin: 0;
    padding: 1.5rem;
    text-align: center;
    font-size: 0.875rem;
    color: var(--text-faint);
}

/* Sections */
.section {
    padding: 4rem 1.5rem;
    max-width: var(--container-max);
    margin: 0 auto;
}

.section--narrow {
    max-width: 56rem;
}

.section__header {
    max-width: 42rem;
    margin: 0 auto;
    text-align: center;
}

.section__title {
    margin: 0;
    font-size: 1.875rem;
    font-weight: 700;
    letter-spacing: -0.02em;
}

.section__lead {
    margin-top: 0.75rem;
    color: var(--text-muted);
}

.section__actions {
    margin-top: 1.5rem;
    display: flex;
    flex-wrap: wrap;
    gap: 0.75rem;
}

/* Cards */
.card-grid {
    margin-top: 2.5rem;
    display: grid;
    gap: 1.5rem;
    grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
}

.card {
    display: flex;
    flex-direction: column;
    border: 1px solid var(--border);
    border-radius: 1.5rem;
    background: var(--bg-card);
    padding: 1.5rem;
    box-shadow: var(--shadow);
    transition: box-shadow 0.15s ease;
}

.card:hover {
    box-shadow: var(--shadow-lg);
}

.card__head {
    display: flex;
    align-items: center;
    gap: 0.75rem;
}

.card__icon {
    display: grid;
    place-items: center;
    width: 2.5rem;
    height: 2.5rem;
    border-radius: 1rem;
    background: var(--button-bg);
    color: var(--button-fg);
    font-size: 1.125rem;
}

.card__title {
    margin: 0;
    font-size: 1.125rem;
    font-weight: 600;
}

.card__body {
    margin-top: 0.75rem;
    font-size: 0.875rem;
    color: var(--text-muted);
}

.card__list {
    margin: 1rem 0 0;
    padding: 0;
    list-style: none;
    display: grid;
    gap: 0.5rem;
    font-size: 0.875rem;
    color: var(--text-muted);
}

.card__list-item {
    display: flex;
    align-items: flex-start;
    gap: 0.5rem;
}

.card__check {
    flex: none;
    color: var(--accent);
}

.card__actions {
    margin-top: 1.5rem;
    display: flex;
    gap: 0.75rem;
}

/* Development */
.development__inner {
    display: grid;
    gap: 2.5rem;
}

.development__phases {
    display: grid;
    gap: 1rem;
    grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
}

/* Testimonials */
.testimonial__quote {
    margin: 0;
    font-size: 0.875rem;
    line-height: 1.7;
}

.testimonial__source {
    margin-top: 1rem;
    font-size: 0.875rem;
    color: var(--text-faint);
}

/* Pricing */
.pricing-grid {
    margin-top: 2.5rem;
    display: grid;
    gap: 1.5rem;
    grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
}

.tier {
    position: relative;
    border: 1px solid var(--border);
    border-radius: 1.5rem;
    background: var(--bg-card);
    padding: 1.5rem;
    box-shadow: var(--shadow);
    transition: box-shadow 0.15s ease;
}

.tier:hover {
    box-shadow: var(--shadow-lg);
}

.tier--highlighted {
    border-color: var(--accent);
    background: color-mix(in srgb, var(--accent-from) 6%, var(--bg-card));
}

.tier__ribbon {
    position: absolute;
    top: -0.75rem;
    left: 1.5rem;
    border-radius: 9999px;
    background: var(--accent);
    color: #ffffff;
    padding: 0.25rem 0.75rem;
    font-size: 0.75rem;
    font-weight: 600;
}

.tier__name {
    margin: 0;
    font-size: 1.125rem;
    font-weight: 600;
}

.tier__price-row {
    margin-top: 0.5rem;
    display: flex;
    align-items: flex-end;
    gap: 0.25rem;
}

.tier__price {
    font-size: 1.875rem;
    font-weight: 800;
}

.tier__period {
    padding-bottom: 0.25rem;
    font-size: 0.875rem;
    color: var(--text-faint);
}

.tier__features {
    margin: 1rem 0 0;
    padding: 0;
    list-style: none;
    display: grid;
    gap: 0.5rem;
    font-size: 0.875rem;
    color: var(--text-muted);
}

.tier .btn {
    margin-top: 1.5rem;
}

/* FAQ */
.faq__list {
    margin-top: 2rem;
    border: 1px solid var(--border);
    border-radius: 1.5rem;
    background: var(--bg-card);
    overflow: hidden;
}

.faq__entry {
    padding: 1rem 1.5rem;
}

.faq__entry + .faq__entry {
    border-top: 1px solid var(--border);
}

.faq__question {
    display: flex;
    align-items: center;
    justify-content: space-between;
    cursor: pointer;
    list-style: none;
    font-size: 0.875rem;
    font-weight: 600;
}

.faq__question::-webkit-details-marker {
    display: none;
}

.faq__chevron {
    transition: transform 0.15s ease;
}

.faq__entry[open] .faq__chevron {
    transform: rotate(180deg);
}

.faq__answer {
    margin: 0.5rem 0 0;
    font-size: 0.875rem;
    color: var(--text-muted);
}

/* Contact */
.contact {
    position: relative;
    overflow: hidden;
    background: radial-gradient(900px 450px at 50% -100px, var(--glow), transparent);
}

.contact__panel {
    border: 1px solid var(--border);
    border-radius: 1.5rem;
    background: var(--bg-card);
    padding: 2rem;
    box-shadow: var(--shadow-lg);
    display: grid;
    gap: 2rem;
}

.contact__actions {
    margin-top: 1.5rem;
    display: flex;
    flex-wrap: wrap;
    gap: 0.75rem;
}

.contact__form {
    display: grid;
    gap: 1rem;
}

.contact__field {
    display: grid;
    gap: 0.25rem;
}

.contact__label {
    font-size: 0.875rem;
    font-weight: 500;
}

.contact__input {
    border: 1px solid var(--border);
    border-radius: 0.75rem;
    background: transparent;
    color: var(--text);
    padding: 0.5rem 0.75rem;
    font-size: 0.875rem;
    font-family: inherit;
    outline: none;
}

.contact__input:focus {
    border-color: var(--accent);
}

.contact__input--textarea {
    resize: none;
}

/* Footer */
.footer {
    border-top: 1px solid var(--border);
    background: var(--bg);
}

.footer__inner {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 2.5rem 1.5rem;
}

.footer__columns {
    display: grid;
    gap: 2rem;
    grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr));
}

.footer__brand {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    font-size: 1.125rem;
    font-weight: 700;
}

.footer__logo {
    display: grid;
    place-items: center;
    width: 1.75rem;
    height: 1.75rem;
    border-radius: 0.5rem;
    background: linear-gradient(135deg, var(--accent-from), var(--accent-to));
    color: #ffffff;
    font-size: 0.875rem;
}

.footer__blurb {
    margin-top: 0.75rem;
    font-size: 0.875rem;
    color: var(--text-muted);
}

.footer__heading {
    margin: 0;
    font-size: 0.875rem;
    font-weight: 600;
}

.footer__list {
    margin: 0.75rem 0 0;
    padding: 0;
    list-style: none;
    display: grid;
    gap: 0.5rem;
    font-size: 0.875rem;
    color: var(--text-muted);
}

.footer__copyright {
    margin-top: 2rem;
    border-top: 1px solid var(--border);
    padding-top: 1.5rem;
    text-align: center;
    font-size: 0.75rem;
    color: var(--text-faint);
}

/* Floating controls */
.back-to-top {
    position: fixed;
    bottom: 1.5rem;
    right: 1.5rem;
    display: grid;
    place-items: center;
    width: 2.75rem;
    height: 2.75rem;
    border: 1px solid var(--border);
    border-radius: 9999px;
    background: var(--bg-card);
    color: var(--text);
    font-size: 1rem;
    cursor: pointer;
    box-shadow: var(--shadow-lg);
    transition: transform 0.15s ease;
}

.back-to-top:hover {
    transform: translateY(-2px);
}

.whatsapp-float {
    position: fixed;
    bottom: 1.5rem;
    left: 1.5rem;
    display: grid;
    place-items: center;
    width: 3rem;
    height: 3rem;
    border-radius: 9999px;
    background: var(--whatsapp);
    color: #ffffff;
    font-size: 1.25rem;
    box-shadow: var(--shadow-lg);
    transition: transform 0.15s ease;
}

.whatsapp-float:hover {
    transform: translateY(-2px);
}

/* Responsive */
@media (min-width: 64rem) {
    .hero__inner {
        grid-template-columns: 1fr 1fr;
    }

    .development__inner {
        grid-template-columns: 1fr 1fr;
    }

    .contact__panel {
        grid-template-columns: 1fr 1fr;
    }

    .hero__title {
        font-size: 3rem;
    }
}

@media (max-width: 48rem) {
    .header__nav {
        display: none;
    }

    .header__mobile-controls {
        display: flex;
    }

    .header__mobile-panel {
        display: block;
    }

    .hero__mock-grid {
        grid-template-columns: repeat(2, 1fr);
    }
}
"#;
