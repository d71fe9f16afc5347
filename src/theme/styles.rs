//! Global CSS for Tempo.
//!
//! Structural rules only: layout, spacing, radii, transitions. Colors
//! are injected inline from the active theme.

pub const GLOBAL_STYLES: &str = r#"
/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body, #main {
  height: 100%;
}

body {
  font-family: 'Open Sans', 'Segoe UI', system-ui, sans-serif;
  font-size: 14px;
  overflow: hidden;
}

button {
  font: inherit;
  background: none;
  border: none;
  cursor: pointer;
}

/* === Channel list screen === */
.channel-list-screen {
  display: flex;
  flex-direction: row;
  height: 100vh;
}

/* === Team sidebar === */
.team-sidebar {
  flex-shrink: 0;
  display: flex;
  flex-direction: column;
  align-items: center;
  padding-top: 16px;
  gap: 12px;
}

.team-avatar {
  width: 44px;
  height: 44px;
  border-radius: 10px;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 18px;
  font-weight: 600;
  cursor: pointer;
}

.team-avatar.selected {
  outline: 2px solid rgba(255, 255, 255, 0.6);
  outline-offset: 2px;
}

/* === Channel list === */
.channel-list {
  width: 280px;
  flex-shrink: 0;
  display: flex;
  flex-direction: column;
  padding: 16px 12px;
  overflow-y: auto;
}

.channel-list-header.icon-pad {
  margin-left: 44px;
}

.channel-list-header .header-row {
  display: flex;
  flex-direction: row;
  align-items: center;
  justify-content: space-between;
}

.chevron-button {
  margin-left: 4px;
  display: flex;
  align-items: center;
}

.plus-button {
  height: 28px;
  width: 28px;
  border-radius: 14px;
  display: flex;
  align-items: center;
  justify-content: center;
}

.server-name {
  margin-top: 2px;
}

.threads-button {
  display: flex;
  flex-direction: row;
  align-items: center;
  margin-top: 16px;
  padding: 6px 4px;
  border-radius: 4px;
  text-align: left;
}

.threads-button:hover {
  background-color: rgba(255, 255, 255, 0.08);
}

.threads-label {
  padding-left: 12px;
}

.category-header {
  padding: 8px 4px;
  margin-top: 12px;
}

.category-body {
  display: flex;
  flex-direction: column;
}

.channel-item {
  display: flex;
  flex-direction: row;
  align-items: center;
  gap: 8px;
  padding: 6px 4px;
  border-radius: 4px;
  cursor: pointer;
}

.channel-item:hover {
  background-color: rgba(255, 255, 255, 0.08);
}

.channel-item.highlighted .channel-item-name {
  font-weight: 600;
}

.channel-item-icon {
  flex-shrink: 0;
}

.channel-list-footer {
  margin-top: auto;
  padding-top: 16px;
}

.custom-status-button {
  padding: 6px 4px;
  border-radius: 4px;
  text-align: left;
}

.custom-status-button:hover {
  background-color: rgba(255, 255, 255, 0.08);
}

.custom-status-summary {
  padding: 4px;
  font-size: 12px;
}

/* === Channel view === */
.channel-view {
  flex: 1;
  display: flex;
  flex-direction: column;
  min-width: 0;
}

.channel-screen {
  height: 100vh;
  display: flex;
  flex-direction: column;
}

.channel-screen-header {
  padding: 8px 12px;
}

.back-button {
  display: flex;
  align-items: center;
  padding: 4px;
}

.channel-view-header {
  padding: 12px 20px;
  border-bottom: 1px solid rgba(0, 0, 0, 0.08);
}

.channel-view-body {
  flex: 1;
  display: flex;
  align-items: center;
  justify-content: center;
}

.channel-view-footer {
  display: flex;
  flex-direction: row;
  align-items: center;
  gap: 8px;
  padding: 12px 20px;
}

.emoji-toggle {
  font-size: 20px;
}

.message-input {
  flex: 1;
  padding: 8px 12px;
  border: 1px solid rgba(0, 0, 0, 0.16);
  border-radius: 4px;
  font: inherit;
}

/* === Emoji picker === */
.emoji-picker {
  border-top: 1px solid rgba(0, 0, 0, 0.08);
  max-height: 320px;
  overflow-y: auto;
  padding: 0 20px;
}

.emoji-section-header {
  display: flex;
  align-items: center;
}

.emoji-section-title {
  font-size: 15px;
  font-weight: 700;
}

/* === Clear-after modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  background-color: rgba(0, 0, 0, 0.4);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 100;
}

.clear-after-modal {
  width: 480px;
  max-height: 80vh;
  border-radius: 8px;
  overflow: hidden;
  display: flex;
  flex-direction: column;
  background-color: #ffffff;
}

.modal-top-bar {
  display: flex;
  flex-direction: row;
  align-items: center;
  padding: 12px 16px;
}

.modal-title {
  flex: 1;
  text-align: center;
  font-size: 16px;
  font-weight: 600;
}

.done-button {
  font-weight: 600;
}

.clear-after-scroll {
  padding: 32px 0;
  overflow-y: auto;
}

.block {
  border-top: 1px solid;
  border-bottom: 1px solid;
  margin-bottom: 24px;
}

.block:last-child {
  margin-bottom: 0;
}

.clear-after-item.separator {
  border-bottom: 1px solid;
}

.clear-after-row {
  display: flex;
  flex-direction: row;
  align-items: center;
  width: 100%;
  padding: 12px 16px;
  text-align: left;
}

.clear-after-check {
  width: 20px;
  flex-shrink: 0;
}

.clear-after-label {
  flex: 1;
}

.clear-after-expiry {
  font-size: 12px;
}

.expiry-picker {
  margin: 0 16px 12px 36px;
  padding: 6px 8px;
  border: 1px solid rgba(0, 0, 0, 0.16);
  border-radius: 4px;
  font: inherit;
}
"#;
