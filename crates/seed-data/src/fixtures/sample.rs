use problems::models::{Difficulty, Language};

use super::{FixtureExample, FixtureTestCase, ProblemFixture};

pub static SAMPLE: &[ProblemFixture] = &[
    ProblemFixture {
        title: "Two Sum",
        description: "Given an array of integers nums and an integer target, return indices of the two numbers such that they add up to target.\n\nYou may assume that each input would have exactly one solution, and you may not use the same element twice.\n\nYou can return the answer in any order.",
        difficulty: Difficulty::Easy,
        tags: &["Array", "Hash Table"],
        companies: &["Google", "Amazon", "Apple"],
        constraints: "2 <= nums.length <= 10^4\n-10^9 <= nums[i] <= 10^9\n-10^9 <= target <= 10^9\nOnly one valid answer exists.",
        hints: Some("A brute force approach checks every pair.\nStore each value's index in a hash map and look up target - nums[i]."),
        editorial: Some("Walk the array once. For each element, check whether its complement has been seen; if so return both indices, otherwise record the element. O(n) time and space."),
        testcases: &[
            FixtureTestCase { input: "2 7 11 15\n9", output: "[0,1]" },
            FixtureTestCase { input: "3 2 4\n6", output: "[1,2]" },
            FixtureTestCase { input: "3 3\n6", output: "[0,1]" },
        ],
        examples: &[
            (
                Language::JavaScript,
                FixtureExample {
                    input: "nums = [2,7,11,15], target = 9",
                    output: "[0,1]",
                    explanation: "Because nums[0] + nums[1] == 9, we return [0, 1].",
                },
            ),
            (
                Language::Python,
                FixtureExample {
                    input: "nums = [3,2,4], target = 6",
                    output: "[1,2]",
                    explanation: "Because nums[1] + nums[2] == 6, we return [1, 2].",
                },
            ),
        ],
        code_snippets: &[
            (Language::JavaScript, "/**\n * @param {number[]} nums\n * @param {number} target\n * @return {number[]}\n */\nvar twoSum = function(nums, target) {\n    // Write your code here\n};"),
            (Language::Python, "class Solution:\n    def twoSum(self, nums: List[int], target: int) -> List[int]:\n        # Write your code here\n        pass"),
            (Language::Java, "class Solution {\n    public int[] twoSum(int[] nums, int target) {\n        // Write your code here\n        return new int[0];\n    }\n}"),
        ],
        reference_solutions: &[(
            Language::Python,
            "class Solution:\n    def twoSum(self, nums, target):\n        seen = {}\n        for i, n in enumerate(nums):\n            if target - n in seen:\n                return [seen[target - n], i]\n            seen[n] = i\n        return []",
        )],
    },
    ProblemFixture {
        title: "Add Two Numbers",
        description: "You are given two non-empty linked lists representing two non-negative integers. The digits are stored in reverse order, and each of their nodes contains a single digit. Add the two numbers and return the sum as a linked list.\n\nYou may assume the two numbers do not contain any leading zero, except the number 0 itself.",
        difficulty: Difficulty::Medium,
        tags: &["Linked List", "Math", "Recursion"],
        companies: &["Microsoft", "Amazon", "Bloomberg"],
        constraints: "The number of nodes in each linked list is in the range [1, 100].\n0 <= Node.val <= 9\nIt is guaranteed that the list represents a number that does not have leading zeros.",
        hints: Some("Keep a carry as you walk both lists."),
        editorial: None,
        testcases: &[
            FixtureTestCase { input: "2 4 3\n5 6 4", output: "[7,0,8]" },
            FixtureTestCase { input: "0\n0", output: "[0]" },
            FixtureTestCase { input: "9 9 9 9 9 9 9\n9 9 9 9", output: "[8,9,9,9,0,0,0,1]" },
        ],
        examples: &[(
            Language::JavaScript,
            FixtureExample {
                input: "l1 = [2,4,3], l2 = [5,6,4]",
                output: "[7,0,8]",
                explanation: "342 + 465 = 807.",
            },
        )],
        code_snippets: &[
            (Language::JavaScript, "var addTwoNumbers = function(l1, l2) {\n    // Write your code here\n};"),
            (Language::Python, "class Solution:\n    def addTwoNumbers(self, l1: Optional[ListNode], l2: Optional[ListNode]) -> Optional[ListNode]:\n        pass"),
            (Language::Java, "class Solution {\n    public ListNode addTwoNumbers(ListNode l1, ListNode l2) {\n        return null;\n    }\n}"),
        ],
        reference_solutions: &[],
    },
    ProblemFixture {
        title: "Longest Substring Without Repeating Characters",
        description: "Given a string s, find the length of the longest substring without repeating characters.",
        difficulty: Difficulty::Medium,
        tags: &["Hash Table", "String", "Sliding Window"],
        companies: &["Amazon", "Adobe"],
        constraints: "0 <= s.length <= 5 * 10^4\ns consists of English letters, digits, symbols and spaces.",
        hints: Some("Use a sliding window.\nTrack the last index at which each character was seen."),
        editorial: Some("Maintain a window [left, right]. When s[right] was last seen inside the window, move left past it. The answer is the widest window seen."),
        testcases: &[
            FixtureTestCase { input: "abcabcbb", output: "3" },
            FixtureTestCase { input: "bbbbb", output: "1" },
            FixtureTestCase { input: "pwwkew", output: "3" },
        ],
        examples: &[
            (
                Language::JavaScript,
                FixtureExample {
                    input: "s = \"abcabcbb\"",
                    output: "3",
                    explanation: "The answer is \"abc\", with the length of 3.",
                },
            ),
            (
                Language::Python,
                FixtureExample {
                    input: "s = \"pwwkew\"",
                    output: "3",
                    explanation: "The answer is \"wke\". \"pwke\" is a subsequence, not a substring.",
                },
            ),
        ],
        code_snippets: &[
            (Language::JavaScript, "var lengthOfLongestSubstring = function(s) {\n    // Write your code here\n};"),
            (Language::Python, "class Solution:\n    def lengthOfLongestSubstring(self, s: str) -> int:\n        pass"),
            (Language::Java, "class Solution {\n    public int lengthOfLongestSubstring(String s) {\n        return 0;\n    }\n}"),
        ],
        reference_solutions: &[(
            Language::JavaScript,
            "var lengthOfLongestSubstring = function(s) {\n    const last = new Map();\n    let left = 0, best = 0;\n    for (let right = 0; right < s.length; right++) {\n        if (last.has(s[right]) && last.get(s[right]) >= left) {\n            left = last.get(s[right]) + 1;\n        }\n        last.set(s[right], right);\n        best = Math.max(best, right - left + 1);\n    }\n    return best;\n};",
        )],
    },
    ProblemFixture {
        title: "Valid Parentheses",
        description: "Given a string s containing just the characters '(', ')', '{', '}', '[' and ']', determine if the input string is valid.\n\nAn input string is valid if open brackets are closed by the same type of brackets, open brackets are closed in the correct order, and every close bracket has a corresponding open bracket.",
        difficulty: Difficulty::Easy,
        tags: &["String", "Stack"],
        companies: &["Google", "Meta", "Amazon"],
        constraints: "1 <= s.length <= 10^4\ns consists of parentheses only '()[]{}'.",
        hints: Some("Push opening brackets on a stack.\nA closing bracket must match the top of the stack."),
        editorial: None,
        testcases: &[
            FixtureTestCase { input: "()", output: "true" },
            FixtureTestCase { input: "()[]{}", output: "true" },
            FixtureTestCase { input: "(]", output: "false" },
            FixtureTestCase { input: "([)]", output: "false" },
        ],
        examples: &[
            (
                Language::JavaScript,
                FixtureExample {
                    input: "s = \"()[]{}\"",
                    output: "true",
                    explanation: "Every bracket is closed by the same type in order.",
                },
            ),
            (
                Language::Java,
                FixtureExample {
                    input: "s = \"(]\"",
                    output: "false",
                    explanation: "'(' is closed by ']'.",
                },
            ),
        ],
        code_snippets: &[
            (Language::JavaScript, "var isValid = function(s) {\n    // Write your code here\n};"),
            (Language::Python, "class Solution:\n    def isValid(self, s: str) -> bool:\n        pass"),
            (Language::Java, "class Solution {\n    public boolean isValid(String s) {\n        return false;\n    }\n}"),
        ],
        reference_solutions: &[(
            Language::Java,
            "class Solution {\n    public boolean isValid(String s) {\n        Deque<Character> stack = new ArrayDeque<>();\n        for (char c : s.toCharArray()) {\n            if (c == '(') stack.push(')');\n            else if (c == '[') stack.push(']');\n            else if (c == '{') stack.push('}');\n            else if (stack.isEmpty() || stack.pop() != c) return false;\n        }\n        return stack.isEmpty();\n    }\n}",
        )],
    },
    ProblemFixture {
        title: "Merge Two Sorted Lists",
        description: "You are given the heads of two sorted linked lists list1 and list2.\n\nMerge the two lists into one sorted list. The list should be made by splicing together the nodes of the first two lists.\n\nReturn the head of the merged linked list.",
        difficulty: Difficulty::Easy,
        tags: &["Linked List", "Recursion"],
        companies: &["Amazon", "Microsoft"],
        constraints: "The number of nodes in both lists is in the range [0, 50].\n-100 <= Node.val <= 100\nBoth list1 and list2 are sorted in non-decreasing order.",
        hints: None,
        editorial: None,
        testcases: &[
            FixtureTestCase { input: "1 2 4\n1 3 4", output: "[1,1,2,3,4,4]" },
            FixtureTestCase { input: "\n", output: "[]" },
            FixtureTestCase { input: "\n0", output: "[0]" },
        ],
        examples: &[(
            Language::Python,
            FixtureExample {
                input: "list1 = [1,2,4], list2 = [1,3,4]",
                output: "[1,1,2,3,4,4]",
                explanation: "Nodes are spliced together in sorted order.",
            },
        )],
        code_snippets: &[
            (Language::JavaScript, "var mergeTwoLists = function(list1, list2) {\n    // Write your code here\n};"),
            (Language::Python, "class Solution:\n    def mergeTwoLists(self, list1: Optional[ListNode], list2: Optional[ListNode]) -> Optional[ListNode]:\n        pass"),
            (Language::Java, "class Solution {\n    public ListNode mergeTwoLists(ListNode list1, ListNode list2) {\n        return null;\n    }\n}"),
        ],
        reference_solutions: &[],
    },
    ProblemFixture {
        title: "Maximum Subarray",
        description: "Given an integer array nums, find the subarray with the largest sum, and return its sum.",
        difficulty: Difficulty::Medium,
        tags: &["Array", "Divide and Conquer", "Dynamic Programming"],
        companies: &["LinkedIn", "Apple"],
        constraints: "1 <= nums.length <= 10^5\n-10^4 <= nums[i] <= 10^4",
        hints: Some("Kadane's algorithm keeps the best sum ending at each index."),
        editorial: Some("Let cur be the best sum of a subarray ending at i: cur = max(nums[i], cur + nums[i]). The answer is the maximum cur over all i."),
        testcases: &[
            FixtureTestCase { input: "-2 1 -3 4 -1 2 1 -5 4", output: "6" },
            FixtureTestCase { input: "1", output: "1" },
            FixtureTestCase { input: "5 4 -1 7 8", output: "23" },
        ],
        examples: &[
            (
                Language::JavaScript,
                FixtureExample {
                    input: "nums = [-2,1,-3,4,-1,2,1,-5,4]",
                    output: "6",
                    explanation: "The subarray [4,-1,2,1] has the largest sum 6.",
                },
            ),
            (
                Language::Python,
                FixtureExample {
                    input: "nums = [5,4,-1,7,8]",
                    output: "23",
                    explanation: "The whole array has the largest sum 23.",
                },
            ),
            (
                Language::Java,
                FixtureExample {
                    input: "nums = [1]",
                    output: "1",
                    explanation: "The only subarray is [1].",
                },
            ),
        ],
        code_snippets: &[
            (Language::JavaScript, "var maxSubArray = function(nums) {\n    // Write your code here\n};"),
            (Language::Python, "class Solution:\n    def maxSubArray(self, nums: List[int]) -> int:\n        pass"),
            (Language::Java, "class Solution {\n    public int maxSubArray(int[] nums) {\n        return 0;\n    }\n}"),
        ],
        reference_solutions: &[(
            Language::Python,
            "class Solution:\n    def maxSubArray(self, nums):\n        best = cur = nums[0]\n        for n in nums[1:]:\n            cur = max(n, cur + n)\n            best = max(best, cur)\n        return best",
        )],
    },
    ProblemFixture {
        title: "Climbing Stairs",
        description: "You are climbing a staircase. It takes n steps to reach the top.\n\nEach time you can either climb 1 or 2 steps. In how many distinct ways can you climb to the top?",
        difficulty: Difficulty::Easy,
        tags: &["Math", "Dynamic Programming", "Memoization"],
        companies: &["Adobe", "Google"],
        constraints: "1 <= n <= 45",
        hints: Some("To reach step n you came from n-1 or n-2."),
        editorial: Some("ways(n) = ways(n-1) + ways(n-2) with ways(1) = 1 and ways(2) = 2. Two rolling variables are enough."),
        testcases: &[
            FixtureTestCase { input: "2", output: "2" },
            FixtureTestCase { input: "3", output: "3" },
            FixtureTestCase { input: "5", output: "8" },
        ],
        examples: &[(
            Language::JavaScript,
            FixtureExample {
                input: "n = 3",
                output: "3",
                explanation: "1 + 1 + 1, 1 + 2 and 2 + 1.",
            },
        )],
        code_snippets: &[
            (Language::JavaScript, "var climbStairs = function(n) {\n    // Write your code here\n};"),
            (Language::Python, "class Solution:\n    def climbStairs(self, n: int) -> int:\n        pass"),
            (Language::Java, "class Solution {\n    public int climbStairs(int n) {\n        return 0;\n    }\n}"),
        ],
        reference_solutions: &[(
            Language::JavaScript,
            "var climbStairs = function(n) {\n    let a = 1, b = 1;\n    for (let i = 0; i < n; i++) {\n        [a, b] = [b, a + b];\n    }\n    return a;\n};",
        )],
    },
    ProblemFixture {
        title: "Trapping Rain Water",
        description: "Given n non-negative integers representing an elevation map where the width of each bar is 1, compute how much water it can trap after raining.",
        difficulty: Difficulty::Hard,
        tags: &["Array", "Two Pointers", "Stack", "Dynamic Programming"],
        companies: &["Goldman Sachs", "Amazon", "Uber"],
        constraints: "n == height.length\n1 <= n <= 2 * 10^4\n0 <= height[i] <= 10^5",
        hints: Some("Water above a bar is bounded by the lower of the tallest bars to its left and right.\nTwo pointers avoid the extra arrays."),
        editorial: None,
        testcases: &[
            FixtureTestCase { input: "0 1 0 2 1 0 1 3 2 1 2 1", output: "6" },
            FixtureTestCase { input: "4 2 0 3 2 5", output: "9" },
        ],
        examples: &[(
            Language::Python,
            FixtureExample {
                input: "height = [0,1,0,2,1,0,1,3,2,1,2,1]",
                output: "6",
                explanation: "6 units of rain water are trapped between the bars.",
            },
        )],
        code_snippets: &[
            (Language::JavaScript, "var trap = function(height) {\n    // Write your code here\n};"),
            (Language::Python, "class Solution:\n    def trap(self, height: List[int]) -> int:\n        pass"),
            (Language::Java, "class Solution {\n    public int trap(int[] height) {\n        return 0;\n    }\n}"),
        ],
        reference_solutions: &[],
    },
];
