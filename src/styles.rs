//! Global CSS styles for the tarot frontend.
//!
//! Shipped as a single constant injected by `App`, so the whole experience
//! builds from one `trunk` target with no external stylesheet.

pub const GLOBAL_STYLES: &str = r#"
/* === Custom Properties === */
:root {
  /* VOID (backgrounds) */
  --void: #0b0817;
  --void-high: #171030;
  --void-border: #2a2150;

  /* GOLD (actions, titles) */
  --gold: #d4af37;
  --gold-soft: #e9d79b;
  --gold-glow: rgba(212, 175, 55, 0.35);

  /* STARLIGHT (text) */
  --text-primary: #f3efff;
  --text-secondary: rgba(243, 239, 255, 0.72);
  --text-muted: rgba(243, 239, 255, 0.45);

  --lilac: #b9a7e6;
  --card-back: #1d1440;

  --font-serif: 'Noto Serif SC', 'Songti SC', Georgia, serif;
}

/* === Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
}

body {
  background: radial-gradient(ellipse at 50% -20%, var(--void-high), var(--void) 65%);
  color: var(--text-primary);
  font-family: var(--font-serif);
  overflow-x: hidden;
}

button {
  font-family: inherit;
  cursor: pointer;
  border: none;
  background: none;
  color: inherit;
}

button:disabled {
  cursor: default;
}

/* === Shell === */
.app-shell {
  position: relative;
  min-height: 100vh;
}

.screen-stage {
  position: relative;
  z-index: 2;
  display: flex;
  justify-content: center;
  min-height: 100vh;
  padding: 3rem 1.5rem;
}

.screen {
  width: 100%;
  max-width: 60rem;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1.4rem;
  animation: screen-enter 700ms ease both;
}

@keyframes screen-enter {
  from { opacity: 0; transform: translateY(0.8rem); }
  to   { opacity: 1; transform: none; }
}

/* Cosmetic overlay raised around page swaps. */
.veil {
  position: fixed;
  inset: 0;
  z-index: 9;
  background: var(--void);
  opacity: 0;
  pointer-events: none;
  transition: opacity 280ms ease;
}

.veil.active {
  opacity: 1;
}

/* === Starfield === */
.starfield {
  position: fixed;
  inset: 0;
  z-index: 0;
  overflow: hidden;
  pointer-events: none;
}

.star {
  position: absolute;
  top: -5%;
  color: var(--gold-soft);
  opacity: 0;
  animation-name: starfall;
  animation-iteration-count: infinite;
  animation-timing-function: linear;
}

@keyframes starfall {
  0%   { transform: translateY(0); opacity: 0; }
  12%  { opacity: 0.9; }
  85%  { opacity: 0.4; }
  100% { transform: translateY(110vh); opacity: 0; }
}

/* === Moon === */
.moon-emblem {
  position: fixed;
  top: 2.2rem;
  right: 2.6rem;
  z-index: 1;
  pointer-events: none;
}

.moon-disc {
  width: 72px;
  height: 72px;
  border-radius: 50%;
  background: transparent;
  box-shadow: inset 14px -6px 0 2px var(--gold-soft), 0 0 34px var(--gold-glow);
  transform: rotate(18deg);
}

/* === Ornament === */
.ornament-divider {
  display: flex;
  align-items: center;
  gap: 0.9rem;
  width: min(24rem, 80%);
}

.ornament-line {
  flex: 1;
  height: 1px;
  background: linear-gradient(90deg, transparent, var(--gold), transparent);
}

.ornament-glyph {
  color: var(--gold);
  letter-spacing: 0.35em;
  font-size: 0.85rem;
}

/* === Buttons === */
.primary-btn {
  padding: 0.75rem 2.6rem;
  border: 1px solid var(--gold);
  border-radius: 2rem;
  color: var(--gold-soft);
  letter-spacing: 0.3em;
  font-size: 1rem;
  background: rgba(212, 175, 55, 0.08);
  transition: background 200ms ease, box-shadow 200ms ease;
}

.primary-btn:hover:not(:disabled) {
  background: rgba(212, 175, 55, 0.2);
  box-shadow: 0 0 22px var(--gold-glow);
}

.primary-btn:disabled {
  opacity: 0.35;
}

.skip-link {
  color: var(--text-muted);
  font-size: 0.85rem;
  letter-spacing: 0.2em;
  text-decoration: underline;
  text-underline-offset: 4px;
}

.skip-link:hover {
  color: var(--text-secondary);
}

/* === Audio toggle === */
.audio-toggle {
  position: fixed;
  bottom: 1.8rem;
  right: 1.8rem;
  z-index: 10;
  width: 2.8rem;
  height: 2.8rem;
  border: 1px solid var(--void-border);
  border-radius: 50%;
  color: var(--text-muted);
  font-size: 1.1rem;
  background: rgba(23, 16, 48, 0.8);
  transition: color 200ms ease, box-shadow 200ms ease;
}

.audio-toggle.on {
  color: var(--gold);
  box-shadow: 0 0 18px var(--gold-glow);
}

/* === Landing === */
.landing-screen {
  justify-content: center;
  text-align: center;
}

.landing-eyebrow {
  color: var(--lilac);
  letter-spacing: 0.6em;
  font-size: 0.85rem;
}

.landing-title {
  font-size: clamp(2rem, 6vw, 3.2rem);
  font-weight: 500;
  letter-spacing: 0.18em;
  color: var(--gold-soft);
  text-shadow: 0 0 30px var(--gold-glow);
}

.landing-lead {
  max-width: 30rem;
  color: var(--text-secondary);
  line-height: 1.9;
}

.question-input {
  width: min(30rem, 100%);
  padding: 1rem 1.2rem;
  border: 1px solid var(--void-border);
  border-radius: 0.6rem;
  background: rgba(11, 8, 23, 0.7);
  color: var(--text-primary);
  font-family: inherit;
  font-size: 1rem;
  line-height: 1.8;
  resize: vertical;
}

.question-input:focus {
  outline: none;
  border-color: var(--gold);
  box-shadow: 0 0 16px var(--gold-glow);
}

.landing-hint {
  color: var(--text-muted);
  font-size: 0.75rem;
  letter-spacing: 0.15em;
}

/* === Selection === */
.screen-title {
  font-size: clamp(1.4rem, 4vw, 2rem);
  font-weight: 500;
  letter-spacing: 0.25em;
  color: var(--gold-soft);
}

.selection-hint {
  color: var(--text-secondary);
  letter-spacing: 0.1em;
}

.card-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(86px, 1fr));
  gap: 0.8rem;
  width: 100%;
}

.card-tile {
  perspective: 700px;
  aspect-ratio: 2 / 3;
  padding: 0;
}

.card-inner {
  position: relative;
  width: 100%;
  height: 100%;
  transform-style: preserve-3d;
  transition: transform 600ms cubic-bezier(0.4, 0, 0.2, 1);
}

.card-tile.flipped .card-inner {
  transform: rotateY(180deg);
}

.card-tile.disabled {
  opacity: 0.35;
  cursor: default;
}

.card-tile:not(.flipped):not(.disabled):hover .card-inner {
  transform: translateY(-0.4rem);
}

.card-back, .card-face {
  position: absolute;
  inset: 0;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 0.3rem;
  border-radius: 0.55rem;
  backface-visibility: hidden;
}

.card-back {
  border: 1px solid var(--void-border);
  background:
    radial-gradient(circle at 50% 40%, rgba(212, 175, 55, 0.14), transparent 60%),
    var(--card-back);
}

.card-back-glyph {
  color: var(--gold);
  font-size: 1.3rem;
  text-shadow: 0 0 12px var(--gold-glow);
}

.card-face {
  transform: rotateY(180deg);
  border: 1px solid rgba(255, 255, 255, 0.25);
  color: #fff;
  text-shadow: 0 1px 3px rgba(0, 0, 0, 0.55);
}

.card-numeral {
  font-size: 0.65rem;
  letter-spacing: 0.2em;
  opacity: 0.85;
}

.card-symbol {
  font-size: 1.5rem;
}

.card-name {
  font-size: 0.78rem;
  letter-spacing: 0.1em;
}

.card-position {
  position: absolute;
  bottom: 0.35rem;
  font-size: 0.62rem;
  letter-spacing: 0.2em;
  padding: 0.1rem 0.5rem;
  border-radius: 1rem;
  background: rgba(0, 0, 0, 0.45);
  color: var(--gold-soft);
}

.reveal-btn {
  animation: screen-enter 400ms ease both;
}

/* === Reading === */
.spread-row {
  display: flex;
  gap: 1rem;
}

.spread-mini {
  width: 5.2rem;
  aspect-ratio: 2 / 3;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 0.25rem;
  border-radius: 0.5rem;
  border: 1px solid rgba(255, 255, 255, 0.25);
  color: #fff;
  text-shadow: 0 1px 3px rgba(0, 0, 0, 0.55);
}

.spread-mini-symbol {
  font-size: 1.2rem;
}

.spread-mini-name {
  font-size: 0.72rem;
  letter-spacing: 0.08em;
}

.spread-mini-position {
  font-size: 0.6rem;
  letter-spacing: 0.2em;
  color: var(--gold-soft);
}

.reading-text {
  width: min(38rem, 100%);
  max-height: 40vh;
  overflow-y: auto;
  padding: 1.4rem 1.6rem;
  border: 1px solid var(--void-border);
  border-radius: 0.8rem;
  background: rgba(23, 16, 48, 0.55);
  color: var(--text-primary);
  line-height: 2.1;
  letter-spacing: 0.04em;
  white-space: pre-wrap;
}

.caret {
  display: inline-block;
  width: 2px;
  height: 1.1em;
  margin-left: 2px;
  vertical-align: text-bottom;
  background: var(--gold);
  animation: caret-blink 900ms step-end infinite;
}

@keyframes caret-blink {
  0%, 100% { opacity: 1; }
  50%      { opacity: 0; }
}

.restart-btn {
  animation: screen-enter 500ms ease both;
}
"#;
