use problems::models::{Difficulty, Language};

use super::{FixtureExample, FixtureTestCase, ProblemFixture};

pub static ADDITIONAL: &[ProblemFixture] = &[
    ProblemFixture {
        title: "Reverse Integer",
        description: "Given a signed 32-bit integer x, return x with its digits reversed. If reversing x causes the value to go outside the signed 32-bit integer range [-2^31, 2^31 - 1], then return 0.\n\nAssume the environment does not allow you to store 64-bit integers.",
        difficulty: Difficulty::Medium,
        tags: &["Math"],
        companies: &["Apple", "Bloomberg"],
        constraints: "-2^31 <= x <= 2^31 - 1",
        hints: Some("Pop digits with % 10 and push them with * 10.\nCheck for overflow before pushing."),
        editorial: None,
        testcases: &[
            FixtureTestCase { input: "123", output: "321" },
            FixtureTestCase { input: "-123", output: "-321" },
            FixtureTestCase { input: "120", output: "21" },
            FixtureTestCase { input: "1534236469", output: "0" },
        ],
        examples: &[(
            Language::Java,
            FixtureExample {
                input: "x = -123",
                output: "-321",
                explanation: "The sign is kept and the digits are reversed.",
            },
        )],
        code_snippets: &[
            (Language::JavaScript, "var reverse = function(x) {\n    // Write your code here\n};"),
            (Language::Python, "class Solution:\n    def reverse(self, x: int) -> int:\n        pass"),
            (Language::Java, "class Solution {\n    public int reverse(int x) {\n        return 0;\n    }\n}"),
        ],
        reference_solutions: &[],
    },
    ProblemFixture {
        title: "Palindrome Number",
        description: "Given an integer x, return true if x is a palindrome, and false otherwise.",
        difficulty: Difficulty::Easy,
        tags: &["Math"],
        companies: &["Amazon"],
        constraints: "-2^31 <= x <= 2^31 - 1",
        hints: Some("Negative numbers are never palindromes.\nReverse only half of the number."),
        editorial: Some("Reverse the lower half of the digits and compare with the upper half. Numbers ending in 0 (other than 0) cannot be palindromes."),
        testcases: &[
            FixtureTestCase { input: "121", output: "true" },
            FixtureTestCase { input: "-121", output: "false" },
            FixtureTestCase { input: "10", output: "false" },
        ],
        examples: &[
            (
                Language::JavaScript,
                FixtureExample {
                    input: "x = 121",
                    output: "true",
                    explanation: "121 reads as 121 from left to right and from right to left.",
                },
            ),
            (
                Language::Python,
                FixtureExample {
                    input: "x = -121",
                    output: "false",
                    explanation: "From right to left it reads 121-.",
                },
            ),
        ],
        code_snippets: &[
            (Language::JavaScript, "var isPalindrome = function(x) {\n    // Write your code here\n};"),
            (Language::Python, "class Solution:\n    def isPalindrome(self, x: int) -> bool:\n        pass"),
            (Language::Java, "class Solution {\n    public boolean isPalindrome(int x) {\n        return false;\n    }\n}"),
        ],
        reference_solutions: &[(
            Language::Python,
            "class Solution:\n    def isPalindrome(self, x):\n        if x < 0 or (x % 10 == 0 and x != 0):\n            return False\n        rev = 0\n        while x > rev:\n            rev = rev * 10 + x % 10\n            x //= 10\n        return x == rev or x == rev // 10",
        )],
    },
    ProblemFixture {
        title: "Container With Most Water",
        description: "You are given an integer array height of length n. There are n vertical lines drawn such that the two endpoints of the ith line are (i, 0) and (i, height[i]).\n\nFind two lines that together with the x-axis form a container, such that the container contains the most water.\n\nReturn the maximum amount of water a container can store.",
        difficulty: Difficulty::Medium,
        tags: &["Array", "Two Pointers", "Greedy"],
        companies: &["Meta", "Goldman Sachs"],
        constraints: "n == height.length\n2 <= n <= 10^5\n0 <= height[i] <= 10^4",
        hints: Some("Start with the widest container and move the shorter line inward."),
        editorial: None,
        testcases: &[
            FixtureTestCase { input: "1 8 6 2 5 4 8 3 7", output: "49" },
            FixtureTestCase { input: "1 1", output: "1" },
        ],
        examples: &[(
            Language::JavaScript,
            FixtureExample {
                input: "height = [1,8,6,2,5,4,8,3,7]",
                output: "49",
                explanation: "Lines at index 1 and 8 hold min(8, 7) * 7 = 49.",
            },
        )],
        code_snippets: &[
            (Language::JavaScript, "var maxArea = function(height) {\n    // Write your code here\n};"),
            (Language::Python, "class Solution:\n    def maxArea(self, height: List[int]) -> int:\n        pass"),
            (Language::Java, "class Solution {\n    public int maxArea(int[] height) {\n        return 0;\n    }\n}"),
        ],
        reference_solutions: &[],
    },
];
