//! Template file contents

/// index.html template
///
/// Parameterized on two independent axes: the Tailwind class attributes
/// (`body_class`/`h1_class`/`p_class`, each either empty or a leading-space
/// ` class="…"` fragment so the non-Tailwind variant carries no attribute at
/// all) and the TypeScript module script line (`script`, either empty or a
/// full indented line including its trailing newline).
pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <link rel="icon" href="/favicon.ico">
  <link rel="stylesheet" href="/styles.css">
  <title>Spark Starter</title>
</head>
<body{{body_class}}>
  <main>
    <h1{{h1_class}}>Hello World</h1>
    <p{{p_class}}>Welcome to your starter project!</p>
  </main>
{{script}}</body>
</html>"#;

/// Tailwind class attribute for `<body>`
pub const TAILWIND_BODY_CLASS: &str =
    r#" class="bg-gray-950 text-white flex flex-col items-center justify-center min-h-screen""#;

/// Tailwind class attribute for `<h1>`
pub const TAILWIND_H1_CLASS: &str = r#" class="text-8xl font-bold text-emerald-300""#;

/// Tailwind class attribute for `<p>`
pub const TAILWIND_P_CLASS: &str = r#" class="text-2xl text-gray-400""#;

/// Module script line referencing the TypeScript entry file
pub const TYPESCRIPT_SCRIPT_TAG: &str =
    "  <script type=\"module\" src=\"/scripts/main.ts\"></script>\n";

/// vite.config.js wiring the Tailwind plugin into the bundler
pub const VITE_CONFIG: &str = r"import { defineConfig } from 'vite'
import tailwindcss from '@tailwindcss/vite'

export default defineConfig({
  plugins: [tailwindcss()],
})";

/// styles.css content when Tailwind is enabled
pub const TAILWIND_STYLESHEET: &str = r#"@import "tailwindcss";"#;

/// TypeScript entry script
pub const ENTRY_SCRIPT: &str = "console.log('Hello from TypeScript!')";

/// .prettierignore content
pub const PRETTIER_IGNORE: &str = "node_modules
dist
";
