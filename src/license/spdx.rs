/// Full license name for a canonical SPDX identifier, if it is a common one.
pub fn display_name(id: &str) -> Option<&'static str> {
    let name = match id.trim() {
        "MIT" => "MIT License",
        "MIT-0" => "MIT No Attribution",
        "Apache-2.0" => "Apache License 2.0",
        "BSD-2-Clause" => "BSD 2-Clause \"Simplified\" License",
        "BSD-3-Clause" => "BSD 3-Clause \"New\" or \"Revised\" License",
        "ISC" => "ISC License",
        "0BSD" => "BSD Zero Clause License",
        "Unlicense" => "The Unlicense",
        "Zlib" => "zlib License",
        "CC0-1.0" => "Creative Commons Zero v1.0 Universal",
        "MPL-2.0" => "Mozilla Public License 2.0",
        "EPL-2.0" => "Eclipse Public License 2.0",
        "LGPL-2.1" | "LGPL-2.1-only" => "GNU Lesser General Public License v2.1 only",
        "LGPL-3.0" | "LGPL-3.0-only" => "GNU Lesser General Public License v3.0 only",
        "GPL-2.0" | "GPL-2.0-only" => "GNU General Public License v2.0 only",
        "GPL-3.0" | "GPL-3.0-only" => "GNU General Public License v3.0 only",
        "AGPL-3.0" | "AGPL-3.0-only" => "GNU Affero General Public License v3.0",
        _ => return None,
    };
    Some(name)
}

/// Normalize common non-SPDX strings to their SPDX equivalents.
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();
    match trimmed {
        "Apache 2.0" | "Apache License 2.0" | "Apache License, Version 2.0" => {
            "Apache-2.0".to_string()
        }
        "MIT License" | "The MIT License" => "MIT".to_string(),
        "BSD 2-Clause" | "Simplified BSD" => "BSD-2-Clause".to_string(),
        "BSD" | "BSD 3-Clause" | "New BSD" | "Modified BSD" => "BSD-3-Clause".to_string(),
        "GPLv2" | "GPL v2" => "GPL-2.0".to_string(),
        "GPLv3" | "GPL v3" => "GPL-3.0".to_string(),
        "MPL 2.0" | "MPLv2" => "MPL-2.0".to_string(),
        "ISC License" => "ISC".to_string(),
        "CC0" | "Public Domain" => "CC0-1.0".to_string(),
        other => other.to_string(),
    }
}

/// Build a [`License`](crate::models::License) from an SPDX expression,
/// filling in the display name where one is known.
pub fn license_for(expr: &str) -> crate::models::License {
    let spdx = normalize(expr);
    let name = display_name(&spdx).map(str::to_string).unwrap_or_else(|| spdx.clone());
    crate::models::License::new(spdx, name)
}
