//! Compiled-in sync configuration
//!
//! Edit these lists to change what the project-to-template sync covers
//! when no config file is given.

/// Template directory, relative to the source project root.
pub const TEMPLATE_DIR: &str =
    "cookiecutter-gd25-arch-backend-python/{{ cookiecutter.project_name }}";

/// Top-level paths synchronized into the template.
pub const SYNC_UNITS: &[&str] = &[
    "app/",
    "alembic/",
    "tests/",
    "scripts/",
    "requirements.txt",
    "requirements-dev.txt",
    "requirements.lock",
    "pyproject.toml",
    "pytest.ini",
    "alembic.ini",
    "env.example",
    "LICENSE",
];

/// Paths never copied into, or deleted from, the template.
pub const EXCLUDE_PATTERNS: &[&str] = &[
    "__pycache__",
    "*.pyc",
    "*.pyo",
    "*.pyd",
    ".pytest_cache",
    ".coverage",
    "coverage.xml",
    ".env",
    ".env.local",
    ".git",
    ".gitignore",
    ".idea",
    ".vscode",
    "*.swp",
    "*.swo",
    "*~",
    ".DS_Store",
    "*.log",
    "*.db",
    "*.sqlite",
    "*.sqlite3",
    "venv/",
    "env/",
    ".venv/",
    "node_modules/",
    "dist/",
    "build/",
    "*.egg-info/",
    ".mypy_cache/",
    ".ruff_cache/",
    "htmlcov/",
    ".tox/",
    // The template ships its own docs and README.
    "docs/",
    "cursor_test/",
    "cursor_docs/",
    "README.md",
    "cookiecutter-gd25-arch-backend-python/",
    ".git/",
];
