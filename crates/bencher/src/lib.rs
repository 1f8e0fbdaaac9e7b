/// One `Accept` header value to negotiate against the default configuration.
#[derive(Debug, Copy, Clone)]
pub struct TestCase {
    name: &'static str,
    group: TestGroup,
    accept: &'static str,
}

impl TestCase {
    pub const fn new(name: &'static str, group: TestGroup, accept: &'static str) -> Self {
        Self { name, group, accept }
    }

    pub const fn small(name: &'static str, accept: &'static str) -> Self {
        Self::new(name, TestGroup::Small, accept)
    }

    pub const fn normal(name: &'static str, accept: &'static str) -> Self {
        Self::new(name, TestGroup::Normal, accept)
    }

    pub const fn large(name: &'static str, accept: &'static str) -> Self {
        Self::new(name, TestGroup::Large, accept)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn group(&self) -> TestGroup {
        self.group
    }

    pub fn accept(&self) -> &'static str {
        self.accept
    }
}

/// Header values as browsers and API clients send them.
pub static TEST_CASES: [TestCase; 5] = [
    TestCase::small("wildcard", "*/*"),
    TestCase::small("exact", "application/json"),
    TestCase::normal("weighted", "application/xml;q=0.9, application/json;q=0.8, */*;q=0.1"),
    TestCase::normal("whitespace", "  text/html ,\tapplication/xml ; q=0.7 , application/json "),
    TestCase::large(
        "browser",
        "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8,\
         application/signed-exchange;v=b3;q=0.7",
    ),
];

#[derive(Clone, Copy, Debug)]
pub enum TestGroup {
    Small,
    Normal,
    Large,
}
