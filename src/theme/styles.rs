//! Global CSS styles for the Pokédex.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Surfaces */
  --surface: #ffffff;
  --surface-muted: #f3f4f6;
  --backdrop: rgba(17, 24, 39, 0.45);

  /* Lines */
  --border: #e5e7eb;
  --border-strong: #d1d5db;
  --border-focus: #9ca3af;

  /* Text */
  --text-primary: #111827;
  --text-muted: #6b7280;

  /* Accents */
  --focus-ring: rgba(59, 130, 246, 0.2);
  --danger: #b91c1c;

  /* Typography */
  --font-sans: system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
  --font-mono: ui-monospace, SFMono-Regular, Menlo, Monaco, Consolas, 'Liberation Mono', 'Courier New', monospace;

  /* Transitions */
  --transition-fast: 120ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  background: var(--surface);
  color: var(--text-primary);
  line-height: 1.5;
  min-height: 100vh;
}

/* === Layout === */
.app-layout {
  position: absolute;
  inset: 0;
  display: grid;
  grid-template-columns: 80px 1fr;
  grid-template-rows: 1fr;
  gap: 16px;
  height: 100%;
}

.app-content {
  position: relative;
  padding: 24px;
  overflow: auto;
}

@media (max-width: 1024px) {
  .app-layout {
    grid-template-columns: 1fr;
    grid-template-rows: auto 1fr;
  }

  .nav-rail {
    flex-direction: row;
    justify-content: center;
    border-right: none;
    border-bottom: 1px solid var(--border);
  }
}

/* === Navigation === */
.nav-rail {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 12px;
  padding: 16px 8px;
  border-right: 1px solid var(--border);
}

.nav-logo {
  font-size: 28px;
  color: #ef4444;
  margin-bottom: 8px;
}

.nav-link {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 2px;
  padding: 8px;
  width: 64px;
  border-radius: 12px;
  color: var(--text-muted);
  text-decoration: none;
  font-size: 12px;
  transition: background var(--transition-fast), color var(--transition-fast);
}

.nav-link:hover,
.nav-link.active {
  background: var(--surface-muted);
  color: var(--text-primary);
}

/* === Search === */
.search-input {
  color: var(--text-primary);
  width: 100%;
  font-size: 16px;
  padding: 12px 16px;
  border-radius: 12px;
  border: 1px solid var(--border);
  outline: none;
}

.search-input:focus {
  border-color: var(--border-focus);
  box-shadow: 0 0 0 3px var(--focus-ring);
}

/* === Creature List === */
.creature-list {
  width: 100%;
  height: 100%;
  display: flex;
  flex-direction: column;
  gap: 16px;
}

.creature-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
  gap: 16px;
}

.card-btn {
  display: flex;
  align-items: center;
  gap: 12px;
  padding: 12px;
  width: 100%;
  text-align: left;
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 16px;
  cursor: pointer;
  font: inherit;
  transition: transform var(--transition-fast), box-shadow var(--transition-fast), border-color var(--transition-fast);
}

.card-btn:hover {
  transform: translateY(-2px);
  box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -4px rgba(0, 0, 0, 0.1);
  border-color: var(--border-strong);
}

.creature-avatar {
  width: 64px;
  height: 64px;
  object-fit: contain;
}

.creature-meta {
  display: flex;
  flex-direction: column;
  flex: 1;
  min-width: 0;
}

.creature-title {
  display: flex;
  align-items: baseline;
  gap: 8px;
  margin-bottom: 6px;
}

.creature-number {
  font-family: var(--font-mono);
  font-size: 12px;
  color: var(--text-muted);
}

.creature-name {
  font-size: 18px;
  font-weight: 600;
  color: var(--text-primary);
  white-space: nowrap;
  overflow: hidden;
  text-overflow: ellipsis;
}

.creature-types {
  display: flex;
  flex-wrap: wrap;
  gap: 6px;
}

/* === Badges === */
.badge {
  --badge-accent: var(--border);
  font-size: 12px;
  padding: 4px 8px;
  border-radius: 9999px;
  background: var(--surface-muted);
  border: 1px solid var(--badge-accent);
  color: var(--text-muted);
}

/* === Status === */
.loading-state {
  display: flex;
  align-items: center;
  gap: 10px;
  padding: 16px;
  font-weight: 500;
}

.loading-spinner {
  width: 16px;
  height: 16px;
  border: 2px solid var(--border);
  border-top-color: var(--text-muted);
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

.empty-state {
  text-align: center;
  color: var(--text-muted);
  padding: 24px;
}

.error-state {
  text-align: center;
  color: var(--danger);
  padding: 24px;
}

/* === Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--backdrop);
  z-index: 100;
}

.modal-panel {
  width: min(600px, calc(100% - 32px));
  max-height: calc(100% - 64px);
  overflow: auto;
  background: var(--surface);
  border-radius: 8px;
  box-shadow: 0 20px 40px rgba(0, 0, 0, 0.25);
}

.modal-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 16px 24px;
  border-bottom: 1px solid var(--border);
}

.modal-title {
  font-size: 20px;
  font-weight: 700;
  color: var(--text-primary);
}

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 32px;
  height: 32px;
  border: none;
  border-radius: 50%;
  background: transparent;
  color: var(--text-muted);
  font-size: 22px;
  cursor: pointer;
}

.icon-btn:hover {
  background: var(--surface-muted);
}

.modal-content {
  display: flex;
  flex-direction: column;
  gap: 16px;
  padding: 16px 24px 24px;
  color: var(--text-primary);
}

/* === Detail === */
.detail-row {
  display: flex;
  gap: 16px;
  align-items: flex-start;
}

.detail-hero {
  width: 128px;
  height: 128px;
  object-fit: contain;
}

.detail-fields {
  display: flex;
  flex-direction: column;
  gap: 8px;
  flex: 1;
}

.detail-kv {
  display: flex;
  justify-content: space-between;
  gap: 12px;
  border-bottom: 1px dashed var(--border);
  padding-bottom: 6px;
}

.detail-kv dt {
  color: var(--text-muted);
}

.detail-kv dd {
  font-weight: 700;
  color: var(--text-primary);
  text-align: right;
}
"#;
