//! Global CSS styles for the trivia desktop app.
//!
//! Dark terminal palette, gold stars, cyan controls.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* VOID (Backgrounds) */
  --void-black: #0a0a0a;
  --void-lighter: #111518;
  --void-border: #1f2326;

  /* MOSS GREEN (Status) */
  --moss: #5a7a5a;
  --moss-glow: #7cb87c;

  /* CYAN (Interactive) */
  --cyan: #00d4aa;
  --cyan-glow: rgba(0, 212, 170, 0.3);

  /* GOLD (Stars, Titles) */
  --gold: #d4af37;
  --gold-glow: rgba(212, 175, 55, 0.3);

  /* TEXT */
  --text-primary: #f5f5f5;
  --text-secondary: rgba(245, 245, 245, 0.7);
  --text-muted: rgba(245, 245, 245, 0.5);

  /* SEMANTIC */
  --danger: #ff3366;

  /* Typography */
  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-3xl: 3rem;

  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-mono);
  background: var(--void-black);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

/* === Layout === */
.app-container {
  max-width: 680px;
  margin: 0 auto;
  padding: 2rem 1.5rem;
}

.app-title {
  font-family: var(--font-serif);
  font-size: var(--text-3xl);
  font-weight: 400;
  color: var(--gold);
  text-shadow: 0 0 30px var(--gold-glow);
  letter-spacing: 0.1em;
  margin-bottom: 1.5rem;
}

.list-controls {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  margin-bottom: 1.5rem;
}

/* === Category Pills === */
.category-pills {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
}

.pill {
  background: transparent;
  border: 1px solid var(--moss);
  border-radius: 999px;
  color: var(--text-secondary);
  font-family: var(--font-mono);
  font-size: var(--text-sm);
  padding: 0.25rem 0.9rem;
  cursor: pointer;
  transition: border-color var(--transition-fast);
}

.pill:hover {
  border-color: var(--moss-glow);
}

.pill.selected {
  background: rgba(124, 184, 124, 0.15);
  color: var(--cyan);
}

/* === Search === */
.search-input-wrapper {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  border-bottom: 1px solid var(--void-border);
}

.input-field {
  flex: 1;
  background: transparent;
  border: none;
  color: var(--cyan);
  font-family: var(--font-mono);
  font-size: var(--text-base);
  padding: 0.5rem 0;
  outline: none;
}

.input-field::placeholder {
  color: var(--text-muted);
  font-style: italic;
}

.search-clear {
  background: none;
  border: none;
  color: var(--text-muted);
  font-size: var(--text-lg);
  cursor: pointer;
}

/* === Question Card === */
.Question-holder {
  background: var(--void-lighter);
  border: 1px solid var(--void-border);
  border-left: 3px solid var(--moss);
  padding: 1.25rem 1.5rem;
  margin-bottom: 1rem;
}

.Question {
  font-size: var(--text-lg);
  margin-bottom: 0.75rem;
}

.fa-star {
  cursor: pointer;
  font-size: var(--text-lg);
  color: var(--text-muted);
}

.fa-star::before {
  content: '\2605';
}

.fa-star.checked {
  color: var(--gold);
  text-shadow: 0 0 8px var(--gold-glow);
}

.fa-star input {
  display: none;
}

.Question-status {
  display: flex;
  align-items: center;
  gap: 1rem;
  margin: 0.75rem 0;
  color: var(--text-secondary);
  font-size: var(--text-sm);
}

.Question-status .category {
  width: 24px;
  height: 24px;
}

.Question-status .delete {
  width: 20px;
  height: 20px;
  margin-left: auto;
  cursor: pointer;
  opacity: 0.6;
}

.Question-status .delete:hover {
  opacity: 1;
}

.show-answer.button {
  display: inline-block;
  border: 1px solid var(--moss);
  color: var(--cyan);
  padding: 0.25rem 0.9rem;
  cursor: pointer;
  font-size: var(--text-sm);
}

.show-answer.button:hover {
  box-shadow: 0 0 10px var(--cyan-glow);
}

.answer-holder {
  margin-top: 0.75rem;
  min-height: 1.6em;
  color: var(--moss-glow);
}

/* === Pager === */
.pager {
  display: flex;
  align-items: center;
  gap: 1rem;
  margin-top: 1.5rem;
}

.btn-page {
  background: transparent;
  border: 1px solid var(--moss);
  color: var(--text-primary);
  font-family: var(--font-mono);
  padding: 0.25rem 0.9rem;
  cursor: pointer;
}

.btn-page:disabled {
  opacity: 0.3;
  cursor: default;
}

.pager-status {
  color: var(--text-muted);
  font-size: var(--text-sm);
}

/* === New Question === */
.new-question-form {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 0.75rem;
  margin-bottom: 1.5rem;
}

.btn-add {
  background: transparent;
  border: 1px solid var(--moss);
  color: var(--text-muted);
  font-family: var(--font-mono);
  padding: 0.25rem 0.9rem;
}

.btn-add-active {
  color: var(--cyan);
  cursor: pointer;
}

/* === Views === */
.view-tabs {
  display: flex;
  gap: 0.5rem;
  margin-bottom: 1.5rem;
}

.quiz-status {
  color: var(--text-muted);
  font-size: var(--text-sm);
  margin: 1rem 0;
}

.quiz-actions {
  display: flex;
  gap: 1rem;
  margin-top: 1rem;
}

/* === Feedback === */
.error-banner {
  border: 1px solid var(--danger);
  color: var(--danger);
  padding: 0.5rem 1rem;
  margin-bottom: 1rem;
}

.empty-state {
  color: var(--text-muted);
  font-style: italic;
}
"#;
