//! Static template bodies for the generated scaffold.
//!
//! Placeholders (`{vendor}`, `{project}`, `{namespace}`, `{class}`, ...) are
//! replaced literally by the generator; there is no templating language.

use crate::domain::TestingFramework;

pub const COMPOSER_JSON: &str = r#"{
    "name": "{vendor}/{project}",
    "description": "",
    "license": "{license}",
    "require": {
        "php": ">=8.1"
    },
    "require-dev": {
        "{testing_package}": "*"
    },
    "autoload": {
        "psr-4": {
            "{namespace_json}\\": "src/"
        }
    }
}
"#;

pub const GITIGNORE: &str = "/vendor\ncomposer.lock\n";

pub const README: &str = r#"# {vendor}/{project}

## Install

Via Composer:

``` bash
$ composer require {vendor}/{project}
```

## Testing

This project uses {testing}:

``` bash
$ {testing_run}
```

## License

{license}. Please see the LICENSE.md file for more information.
"#;

pub const SRC_CLASS: &str = r#"<?php

namespace {namespace};

class {class}
{
    public function __construct()
    {
        //
    }
}
"#;

// ── Per-framework scaffolding ─────────────────────────────────────────────────

const PHPUNIT_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<phpunit bootstrap="vendor/autoload.php" colors="true">
    <testsuites>
        <testsuite name="{project} Test Suite">
            <directory>tests</directory>
        </testsuite>
    </testsuites>
</phpunit>
"#;

const PHPUNIT_TEST: &str = r#"<?php

namespace {namespace}\Tests;

use {namespace}\{class};
use PHPUnit\Framework\TestCase;

class {class}Test extends TestCase
{
    public function testIsInstantiable()
    {
        $this->assertInstanceOf({class}::class, new {class}());
    }
}
"#;

const BEHAT_YML: &str = r#"default:
    suites:
        default:
            contexts:
                - FeatureContext
"#;

const BEHAT_CONTEXT: &str = r#"<?php

use Behat\Behat\Context\Context;

class FeatureContext implements Context
{
    public function __construct()
    {
        //
    }
}
"#;

const PHPSPEC_YML: &str = r#"suites:
    {project}_suite:
        namespace: {namespace}
        psr4_prefix: {namespace}
"#;

const PHPSPEC_SPEC: &str = r#"<?php

namespace spec\{namespace};

use PhpSpec\ObjectBehavior;

class {class}Spec extends ObjectBehavior
{
    function it_is_initializable()
    {
        $this->shouldHaveType('{namespace}\{class}');
    }
}
"#;

const CODECEPTION_YML: &str = r#"paths:
    tests: tests
    output: tests/_output
    data: tests/_data
    support: tests/_support
settings:
    bootstrap: _bootstrap.php
    colors: true
"#;

const CODECEPTION_TEST: &str = r#"<?php

namespace {namespace}\Tests;

use Codeception\Test\Unit;
use {namespace}\{class};

class {class}Test extends Unit
{
    public function testIsInstantiable()
    {
        $this->assertInstanceOf({class}::class, new {class}());
    }
}
"#;

/// Test scaffolding for one framework: config file plus test stub, each as a
/// (root-relative path template, body template) pair.
pub struct TestScaffold {
    pub config_path: &'static str,
    pub config_body: &'static str,
    pub stub_path: &'static str,
    pub stub_body: &'static str,
}

/// Fixed lookup over the four framework variants.
pub fn test_scaffold(framework: TestingFramework) -> TestScaffold {
    match framework {
        TestingFramework::Phpunit => TestScaffold {
            config_path: "phpunit.xml.dist",
            config_body: PHPUNIT_XML,
            stub_path: "tests/{class}Test.php",
            stub_body: PHPUNIT_TEST,
        },
        TestingFramework::Behat => TestScaffold {
            config_path: "behat.yml",
            config_body: BEHAT_YML,
            stub_path: "features/bootstrap/FeatureContext.php",
            stub_body: BEHAT_CONTEXT,
        },
        TestingFramework::Phpspec => TestScaffold {
            config_path: "phpspec.yml",
            config_body: PHPSPEC_YML,
            stub_path: "spec/{class}Spec.php",
            stub_body: PHPSPEC_SPEC,
        },
        TestingFramework::Codeception => TestScaffold {
            config_path: "codeception.yml",
            config_body: CODECEPTION_YML,
            stub_path: "tests/unit/{class}Test.php",
            stub_body: CODECEPTION_TEST,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_framework_has_a_scaffold() {
        use crate::domain::OptionSet;
        for fw in TestingFramework::ALL {
            let scaffold = test_scaffold(*fw);
            assert!(!scaffold.config_path.is_empty());
            assert!(!scaffold.stub_body.is_empty());
        }
    }

    #[test]
    fn config_filenames_differ_per_framework() {
        assert_eq!(
            test_scaffold(TestingFramework::Phpunit).config_path,
            "phpunit.xml.dist"
        );
        assert_eq!(test_scaffold(TestingFramework::Behat).config_path, "behat.yml");
        assert_eq!(
            test_scaffold(TestingFramework::Phpspec).config_path,
            "phpspec.yml"
        );
        assert_eq!(
            test_scaffold(TestingFramework::Codeception).config_path,
            "codeception.yml"
        );
    }
}
