//! Global CSS styles for Daylog.
//!
//! Light journal look; the modal styling mirrors the mobile app's sheet.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* BRAND */
  --primary: #3C23D7;
  --primary-soft: rgba(60, 35, 215, 0.08);

  /* SURFACES */
  --page-bg: #f7f7f9;
  --surface: #ffffff;
  --surface-muted: #f0f0f0;
  --cancel-bg: #f5f5f5;
  --border: #eeeeee;
  --overlay: rgba(0, 0, 0, 0.5);

  /* TEXT */
  --text-strong: #333333;
  --text-body: #444444;
  --text-muted: #666666;

  /* SEMANTIC */
  --exercise-green: #2e9e5b;
  --danger: #d23c3c;

  /* Typography */
  --font-sans: -apple-system, 'Segoe UI', 'Helvetica Neue', Arial, sans-serif;

  /* Radii */
  --radius-sm: 8px;
  --radius-lg: 20px;

  /* Transitions */
  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--page-bg);
  color: var(--text-body);
  line-height: 1.5;
  min-height: 100vh;
}

button {
  font-family: inherit;
  cursor: pointer;
  border: none;
  background: none;
}

/* === Schedule Page === */
.schedule-page {
  max-width: 560px;
  margin: 0 auto;
  padding: 1.25rem;
}

.schedule-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: 1.25rem;
}

.schedule-title {
  font-size: 1.5rem;
  font-weight: 700;
  color: var(--text-strong);
}

.add-buttons {
  display: flex;
  gap: 0.5rem;
}

.add-button {
  padding: 0.5rem 0.9rem;
  border-radius: var(--radius-sm);
  font-size: 0.875rem;
  font-weight: 600;
  color: var(--primary);
  background: var(--primary-soft);
  transition: background var(--transition-fast);
}

.add-button:hover {
  background: rgba(60, 35, 215, 0.16);
}

.add-button--exercise {
  color: var(--exercise-green);
  background: rgba(46, 158, 91, 0.1);
}

.add-button--exercise:hover {
  background: rgba(46, 158, 91, 0.2);
}

.load-error {
  padding: 0.75rem 1rem;
  margin-bottom: 1rem;
  border-radius: var(--radius-sm);
  background: rgba(210, 60, 60, 0.08);
  color: var(--danger);
  font-size: 0.875rem;
}

.schedule-list {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.empty-hint {
  padding: 2rem 0;
  text-align: center;
  color: var(--text-muted);
}

/* === Schedule Card === */
.schedule-card {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius-sm);
  padding: 1rem;
}

.schedule-card__meta {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: 0.5rem;
}

.tag-badge {
  padding: 0.15rem 0.6rem;
  border-radius: 999px;
  font-size: 0.75rem;
  font-weight: 600;
  color: var(--primary);
  background: var(--primary-soft);
}

.tag-badge--exercise {
  color: var(--exercise-green);
  background: rgba(46, 158, 91, 0.1);
}

.schedule-card__date {
  font-size: 0.75rem;
  color: var(--text-muted);
}

.schedule-card__content {
  white-space: pre-wrap;
  color: var(--text-body);
}

.schedule-card__image {
  width: 100%;
  height: 200px;
  object-fit: cover;
  border-radius: var(--radius-sm);
  margin-top: 0.75rem;
}

/* === Add Schedule Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  background: var(--overlay);
  display: flex;
  justify-content: center;
  align-items: center;
  z-index: 100;
}

.schedule-modal {
  width: 90%;
  max-width: 480px;
  background: var(--surface);
  border-radius: var(--radius-lg);
  padding: 20px;
  box-shadow: 0 8px 30px rgba(0, 0, 0, 0.2);
}

.modal-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: 20px;
  padding-bottom: 10px;
  border-bottom: 1px solid var(--border);
}

.modal-title {
  font-size: 1.25rem;
  font-weight: 600;
  color: var(--text-strong);
}

.modal-close {
  font-size: 1.25rem;
  color: var(--text-muted);
  padding: 5px;
}

.tab-row {
  display: flex;
  margin-bottom: 20px;
}

.tab {
  flex: 1;
  padding: 10px 0;
  text-align: center;
  font-size: 1rem;
  color: var(--text-muted);
  border-bottom: 2px solid var(--border);
  transition: border-color var(--transition-fast), color var(--transition-fast);
}

.tab--active {
  color: var(--primary);
  font-weight: 600;
  border-bottom-color: var(--primary);
}

.modal-body {
  min-height: 200px;
}

.content-input {
  width: 100%;
  min-height: 150px;
  padding: 12px;
  border: 1px solid var(--border);
  border-radius: var(--radius-sm);
  font-family: inherit;
  font-size: 1rem;
  color: var(--text-body);
  resize: vertical;
}

.content-input:focus {
  outline: none;
  border-color: var(--primary);
}

.photo-button {
  display: block;
  width: 100%;
  padding: 10px;
  margin-top: 10px;
  border-radius: var(--radius-sm);
  background: var(--surface-muted);
  color: var(--text-muted);
  font-size: 0.875rem;
  text-align: center;
}

.photo-button:disabled {
  opacity: 0.6;
  cursor: default;
}

.photo-preview {
  position: relative;
  margin-top: 10px;
}

.photo-preview__image {
  width: 100%;
  height: 200px;
  object-fit: cover;
  border-radius: var(--radius-sm);
}

.photo-remove {
  position: absolute;
  top: 10px;
  right: 10px;
  width: 24px;
  height: 24px;
  border-radius: 12px;
  background: rgba(0, 0, 0, 0.5);
  color: white;
  font-size: 12px;
  line-height: 24px;
  text-align: center;
}

.modal-actions {
  display: flex;
  justify-content: space-between;
  gap: 10px;
  margin-top: 20px;
}

.modal-actions .btn {
  flex: 1;
  padding: 12px 0;
  border-radius: var(--radius-sm);
  font-size: 1rem;
  text-align: center;
}

.btn-cancel {
  background: var(--cancel-bg);
  color: var(--text-muted);
}

.btn-save {
  background: var(--primary);
  color: white;
}

.btn-save:disabled {
  opacity: 0.7;
  cursor: default;
}
"#;
