//! Global CSS styles for the gift viewer.
//!
//! Dark storefront palette on a near-black background.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Backgrounds */
  --bg-page: #0d1117;
  --bg-card: #0b0f13;
  --bg-placeholder: #1f2937;

  /* Text */
  --text-primary: #ffffff;
  --text-muted: #9ca3af;
  --text-dark: #000000;

  /* Accents */
  --accent: #2563eb;
  --border: rgba(255, 255, 255, 0.6);
  --overlay: rgba(0, 0, 0, 0.6);

  /* Typography */
  --font-sans: system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
  --text-sm: 0.875rem;
  --text-lg: 1.125rem;
  --text-xl: 1.25rem;
  --text-2xl: 1.5rem;

  --content-width: 48rem;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  background: var(--bg-page);
  color: var(--text-primary);
  line-height: 1.5;
  min-height: 100vh;
}

button {
  font: inherit;
  cursor: pointer;
}

.hidden {
  display: none !important;
}

/* === Full-screen messages (loading, not found, fallback) === */
.screen-message {
  min-height: 100vh;
  background: var(--bg-page);
  color: var(--text-primary);
  display: flex;
  align-items: center;
  justify-content: center;
}

/* === Gift page === */
.gift-page {
  min-height: 100vh;
  background: var(--bg-page);
  padding: 1rem;
}

.gift-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  max-width: var(--content-width);
  margin: 0 auto;
}

.gift-title {
  font-size: var(--text-xl);
  font-weight: 600;
}

.btn-outline {
  background: transparent;
  color: var(--text-primary);
  border: 1px solid var(--border);
  border-radius: 0.25rem;
  padding: 0.25rem 0.75rem;
}

.gift-main {
  max-width: var(--content-width);
  margin: 1.5rem auto 0;
}

.gift-card {
  background: var(--bg-card);
  border-radius: 0.5rem;
  padding: 1rem;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1.5rem;
}

.gift-card__image,
.gift-card__info {
  width: 100%;
}

@media (min-width: 768px) {
  .gift-card {
    flex-direction: row;
    padding: 2rem;
  }

  .gift-card__image,
  .gift-card__info {
    width: 50%;
  }
}

.gift-model {
  font-size: var(--text-lg);
  font-weight: 500;
  margin-bottom: 0.5rem;
}

.gift-attributes {
  margin-bottom: 1rem;
}

.btn-buy {
  background: var(--accent);
  color: var(--text-primary);
  border: none;
  border-radius: 0.25rem;
  padding: 0.5rem 1rem;
}

/* === Lazy image === */
.lazy-image {
  width: 100%;
  height: 20rem;
  background: var(--bg-page);
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: 0.25rem;
  overflow: hidden;
}

.lazy-image__placeholder {
  width: 100%;
  height: 100%;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--bg-placeholder);
}

.lazy-image__text {
  font-size: var(--text-sm);
  color: var(--text-muted);
}

.lazy-image__img {
  display: block;
  width: 100%;
  height: 100%;
  object-fit: contain;
}

@keyframes pulse {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.5; }
}

.animate-pulse {
  animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
}

/* === Purchase modal === */
.modal-root {
  position: fixed;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 50;
}

.modal-backdrop {
  position: absolute;
  inset: 0;
  background: var(--overlay);
}

.purchase-modal {
  position: relative;
  z-index: 10;
  background: var(--text-primary);
  color: var(--text-dark);
  border-radius: 0.5rem;
  padding: 2rem;
}

.modal-title {
  font-size: var(--text-2xl);
  margin-bottom: 1rem;
}

.btn-close {
  margin-top: 1rem;
  padding: 0.5rem 1rem;
  background: var(--bg-page);
  color: var(--text-primary);
  border: none;
  border-radius: 0.25rem;
}

@keyframes fade {
  from { opacity: 0; transform: scale(.95); }
  to { opacity: 1; transform: scale(1); }
}

.animate-fade {
  animation: fade .25s ease-out;
}
"#;
