//! Global CSS for the portfolio page.
//!
//! Light palette on `:root`, dark palette under `[data-theme="dark"]`.
//! Inline styles written at runtime (navbar translucency, reveal, tilt)
//! take precedence over these rules.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --primary: #4063B5;
  --accent: #E6791B;
  --success: #38A169;
  --danger: #E53E3E;

  --bg: #f7f9fc;
  --bg-card: #ffffff;
  --text-primary: #1a202c;
  --text-secondary: #4a5568;
  --border: rgba(0, 0, 0, 0.08);
  --shadow: 0 10px 30px rgba(0, 0, 0, 0.08);

  --font-sans: 'Inter', system-ui, -apple-system, sans-serif;
  --ease-out: cubic-bezier(0.23, 1, 0.320, 1);
  --nav-height: 72px;
}

[data-theme="dark"] {
  --bg: #1a202c;
  --bg-card: #2d3748;
  --text-primary: #f7fafc;
  --text-secondary: #cbd5e0;
  --border: rgba(255, 255, 255, 0.08);
  --shadow: 0 10px 30px rgba(0, 0, 0, 0.4);
}

/* === Base === */
*, *::before, *::after { box-sizing: border-box; }

html { scroll-behavior: smooth; }

body {
  margin: 0;
  font-family: var(--font-sans);
  background: var(--bg);
  color: var(--text-primary);
  line-height: 1.6;
  overflow-x: hidden;
}

a { color: var(--primary); text-decoration: none; }

.container {
  max-width: 1100px;
  margin: 0 auto;
  padding: 0 1.5rem;
}

/* === Navbar === */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  height: var(--nav-height);
  z-index: 100;
  background: rgba(255, 255, 255, 0.95);
  backdrop-filter: blur(10px);
  transition: background 0.3s ease, box-shadow 0.3s ease, transform 0.3s ease;
}

.nav-container {
  max-width: 1100px;
  height: 100%;
  margin: 0 auto;
  padding: 0 1.5rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.nav-logo a {
  font-weight: 800;
  font-size: 1.4rem;
  background: linear-gradient(135deg, var(--primary), var(--accent));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.nav-menu {
  display: flex;
  gap: 1.5rem;
  list-style: none;
  margin: 0;
  padding: 0;
}

.nav-link {
  display: inline-block;
  color: var(--text-secondary);
  font-weight: 500;
  transition: color 0.2s ease, transform 0.15s ease;
}

.nav-link:hover,
.nav-link.active { color: var(--primary); }

.nav-actions { display: flex; gap: 0.5rem; }

.icon-btn {
  width: 40px;
  height: 40px;
  border: 1px solid var(--border);
  border-radius: 50%;
  background: var(--bg-card);
  color: var(--text-primary);
  cursor: pointer;
  transition: transform 0.3s var(--ease-out);
}

.mobile-menu-toggle { display: none; flex-direction: column; justify-content: center; gap: 4px; }
.mobile-menu-toggle .bar {
  display: block;
  width: 18px;
  height: 2px;
  margin: 0 auto;
  background: currentColor;
}

/* === Sections === */
.section {
  padding: calc(var(--nav-height) + 3rem) 0 4rem;
  opacity: 0;
}

.section.visible { opacity: 1; }

.section-title {
  font-size: 2.2rem;
  margin: 0 0 0.5rem;
}

.section-subtitle { color: var(--text-secondary); margin: 0 0 2rem; }

/* === Hero === */
.hero {
  position: relative;
  min-height: 100vh;
  display: flex;
  align-items: center;
  opacity: 1;
}

.hero-name {
  font-size: clamp(2.5rem, 6vw, 4.5rem);
  margin: 0;
  line-height: 1.1;
}

.hero-role { font-size: 1.4rem; color: var(--primary); margin: 0.5rem 0; }
.hero-tagline { max-width: 36rem; color: var(--text-secondary); }
.hero-actions { display: flex; gap: 1rem; margin-top: 2rem; flex-wrap: wrap; }

.floating-shapes { position: absolute; inset: 0; pointer-events: none; overflow: hidden; }

.shape {
  position: absolute;
  border-radius: 30%;
  opacity: 0.25;
  background: linear-gradient(135deg, var(--primary), var(--accent));
  transition: transform 0.2s ease-out;
}

.shape-1 { width: 220px; height: 220px; top: 15%; right: 8%; }
.shape-2 { width: 120px; height: 120px; bottom: 18%; right: 30%; border-radius: 50%; }
.shape-3 { width: 80px; height: 80px; top: 30%; left: 6%; }

/* === Buttons === */
.btn {
  display: inline-block;
  padding: 0.8rem 1.6rem;
  border-radius: 999px;
  border: 2px solid var(--primary);
  font-weight: 600;
  cursor: pointer;
  transition: transform 0.3s var(--ease-out), box-shadow 0.3s ease;
}

.btn-primary { background: var(--primary); color: #fff; }
.btn-outline { background: transparent; color: var(--primary); }
.btn:hover { box-shadow: var(--shadow); }
.btn:disabled { cursor: progress; }

/* === Cards === */
.card {
  background: var(--bg-card);
  border: 1px solid var(--border);
  border-radius: 16px;
  padding: 1.5rem;
  box-shadow: var(--shadow);
}

.card-3d {
  opacity: 0;
  transform: translateY(30px);
  transform-style: preserve-3d;
  transition: opacity 0.6s var(--ease-out), transform 0.6s var(--ease-out);
}

.card-title { margin: 0 0 0.25rem; }
.card-meta { margin: 0 0 0.75rem; color: var(--text-secondary); font-size: 0.9rem; }
.card-tags {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  list-style: none;
  padding: 0;
  margin: 1rem 0 0;
}
.tag { padding: 0.2rem 0.7rem; border-radius: 999px; font-size: 0.8rem; background: var(--border); }

.card-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
  gap: 1.5rem;
}

.timeline {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
  border-left: 2px solid var(--primary);
  padding-left: 1.5rem;
}

.project-links { display: flex; gap: 0.75rem; margin-top: 1rem; }
.project-link { padding: 0.5rem 1.1rem; font-size: 0.9rem; }

.skill-list {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  list-style: none;
  padding: 0;
  margin: 0;
}

/* === Contact === */
.contact-grid { display: grid; grid-template-columns: 1fr 1.5fr; gap: 2rem; }

.form-group { margin-bottom: 1.25rem; }
.form-label { display: block; font-weight: 600; margin-bottom: 0.4rem; }

.form-input {
  width: 100%;
  padding: 0.75rem 1rem;
  border: 1px solid var(--border);
  border-radius: 10px;
  background: var(--bg);
  color: var(--text-primary);
  font: inherit;
}

.form-input:focus { outline: 2px solid var(--primary); outline-offset: 1px; }
.form-textarea { resize: vertical; min-height: 8rem; }

.error-message {
  min-height: 1.2em;
  margin: 0.3rem 0 0;
  color: var(--danger);
  font-size: 0.85rem;
}

/* === Particles === */
.success-particle {
  position: fixed;
  width: 8px;
  height: 8px;
  margin: -4px 0 0 -4px;
  border-radius: 50%;
  background: linear-gradient(135deg, var(--primary), var(--accent));
  pointer-events: none;
  z-index: 1000;
  animation-name: particleBurst;
  animation-timing-function: cubic-bezier(0.23, 1, 0.320, 1);
  animation-fill-mode: forwards;
}

/* === Keyframes === */
@keyframes particleBurst {
  from { transform: translate(0, 0) scale(1); opacity: 1; }
  to { transform: translate(var(--dx), var(--dy)) scale(0); opacity: 0; }
}

@keyframes gradientShift {
  0% { background-position: 0% 50%; }
  50% { background-position: 100% 50%; }
  100% { background-position: 0% 50%; }
}

@keyframes downloadProgress {
  from { background-position: 100% 0; }
  to { background-position: 0 0; }
}

/* === Mobile === */
@media (max-width: 768px) {
  .mobile-menu-toggle { display: flex; }

  .nav-menu {
    position: fixed;
    top: var(--nav-height);
    left: 0;
    right: 0;
    flex-direction: column;
    padding: 1.5rem;
    background: var(--bg-card);
    box-shadow: var(--shadow);
    transform: translateY(-120%);
    transition: transform 0.3s var(--ease-out);
  }

  .nav-menu.active { transform: translateY(0); }

  .contact-grid { grid-template-columns: 1fr; }
}
"#;
