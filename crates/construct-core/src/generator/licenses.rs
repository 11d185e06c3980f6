//! Static license bodies, keyed by the [`License`] variant.
//!
//! MIT ships its full text; the GPL and Apache bodies are the standard
//! "how to apply" notices pointing at the canonical full text, which keeps
//! the generated LICENSE.md short while remaining legally meaningful.

use crate::domain::License;

const MIT: &str = r#"The MIT License (MIT)

Copyright (c) {year} {vendor}

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in
all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
THE SOFTWARE.
"#;

const APACHE2: &str = r#"Copyright {year} {vendor}

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
"#;

const GPL2: &str = r#"{project}
Copyright (C) {year} {vendor}

This program is free software; you can redistribute it and/or modify
it under the terms of the GNU General Public License as published by
the Free Software Foundation; either version 2 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU General Public License for more details.

You should have received a copy of the GNU General Public License along
with this program; if not, write to the Free Software Foundation, Inc.,
51 Franklin Street, Fifth Floor, Boston, MA 02110-1301 USA.
"#;

const GPL3: &str = r#"{project}
Copyright (C) {year} {vendor}

This program is free software: you can redistribute it and/or modify
it under the terms of the GNU General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU General Public License for more details.

You should have received a copy of the GNU General Public License
along with this program.  If not, see <https://www.gnu.org/licenses/>.
"#;

/// Look up the license body template for a variant.
pub fn license_body(license: License) -> &'static str {
    match license {
        License::Mit => MIT,
        License::Apache2 => APACHE2,
        License::Gpl2 => GPL2,
        License::Gpl3 => GPL3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OptionSet;

    #[test]
    fn every_license_has_a_body() {
        for license in License::ALL {
            assert!(!license_body(*license).is_empty());
        }
    }

    #[test]
    fn mit_body_carries_the_full_grant() {
        assert!(license_body(License::Mit).contains("Permission is hereby granted"));
    }

    #[test]
    fn gpl_bodies_name_their_versions() {
        assert!(license_body(License::Gpl2).contains("version 2 of the License"));
        assert!(license_body(License::Gpl3).contains("version 3 of the License"));
    }
}
