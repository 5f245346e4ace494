use problems::models::{Difficulty, Language};

use super::{FixtureExample, FixtureTestCase, ProblemFixture};

pub static MORE: &[ProblemFixture] = &[
    // Identical to the sample entry; stored as a separate row.
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
        title: "Best Time to Buy and Sell Stock",
        description: "You are given an array prices where prices[i] is the price of a given stock on the ith day.\n\nYou want to maximize your profit by choosing a single day to buy one stock and choosing a different day in the future to sell that stock.\n\nReturn the maximum profit you can achieve from this transaction. If you cannot achieve any profit, return 0.",
        difficulty: Difficulty::Easy,
        tags: &["Array", "Dynamic Programming"],
        companies: &["Amazon", "Bloomberg", "Goldman Sachs"],
        constraints: "1 <= prices.length <= 10^5\n0 <= prices[i] <= 10^4",
        hints: Some("Track the lowest price seen so far."),
        editorial: None,
        testcases: &[
            FixtureTestCase { input: "7 1 5 3 6 4", output: "5" },
            FixtureTestCase { input: "7 6 4 3 1", output: "0" },
        ],
        examples: &[
            (
                Language::JavaScript,
                FixtureExample {
                    input: "prices = [7,1,5,3,6,4]",
                    output: "5",
                    explanation: "Buy on day 2 (price = 1) and sell on day 5 (price = 6), profit = 6-1 = 5.",
                },
            ),
            (
                Language::Python,
                FixtureExample {
                    input: "prices = [7,6,4,3,1]",
                    output: "0",
                    explanation: "No transaction is done, the max profit is 0.",
                },
            ),
        ],
        code_snippets: &[
            (Language::JavaScript, "var maxProfit = function(prices) {\n    // Write your code here\n};"),
            (Language::Python, "class Solution:\n    def maxProfit(self, prices: List[int]) -> int:\n        pass"),
            (Language::Java, "class Solution {\n    public int maxProfit(int[] prices) {\n        return 0;\n    }\n}"),
        ],
        reference_solutions: &[],
    },
    ProblemFixture {
        title: "Contains Duplicate",
        description: "Given an integer array nums, return true if any value appears at least twice in the array, and return false if every element is distinct.",
        difficulty: Difficulty::Easy,
        tags: &["Array", "Hash Table", "Sorting"],
        companies: &["Apple", "Adobe"],
        constraints: "1 <= nums.length <= 10^5\n-10^9 <= nums[i] <= 10^9",
        hints: None,
        editorial: None,
        testcases: &[
            FixtureTestCase { input: "1 2 3 1", output: "true" },
            FixtureTestCase { input: "1 2 3 4", output: "false" },
            FixtureTestCase { input: "1 1 1 3 3 4 3 2 4 2", output: "true" },
        ],
        examples: &[(
            Language::Python,
            FixtureExample {
                input: "nums = [1,2,3,1]",
                output: "true",
                explanation: "The element 1 occurs at indices 0 and 3.",
            },
        )],
        code_snippets: &[
            (Language::JavaScript, "var containsDuplicate = function(nums) {\n    // Write your code here\n};"),
            (Language::Python, "class Solution:\n    def containsDuplicate(self, nums: List[int]) -> bool:\n        pass"),
            (Language::Java, "class Solution {\n    public boolean containsDuplicate(int[] nums) {\n        return false;\n    }\n}"),
        ],
        reference_solutions: &[(
            Language::Python,
            "class Solution:\n    def containsDuplicate(self, nums):\n        return len(set(nums)) != len(nums)",
        )],
    },
    ProblemFixture {
        title: "Product of Array Except Self",
        description: "Given an integer array nums, return an array answer such that answer[i] is equal to the product of all the elements of nums except nums[i].\n\nYou must write an algorithm that runs in O(n) time and without using the division operation.",
        difficulty: Difficulty::Medium,
        tags: &["Array", "Prefix Sum"],
        companies: &["Meta", "Amazon", "Microsoft"],
        constraints: "2 <= nums.length <= 10^5\n-30 <= nums[i] <= 30\nThe product of any prefix or suffix of nums fits in a 32-bit integer.",
        hints: Some("Compute prefix products left to right.\nMultiply in suffix products right to left."),
        editorial: None,
        testcases: &[
            FixtureTestCase { input: "1 2 3 4", output: "[24,12,8,6]" },
            FixtureTestCase { input: "-1 1 0 -3 3", output: "[0,0,9,0,0]" },
        ],
        examples: &[(
            Language::Java,
            FixtureExample {
                input: "nums = [1,2,3,4]",
                output: "[24,12,8,6]",
                explanation: "answer[0] = 2*3*4, answer[1] = 1*3*4, and so on.",
            },
        )],
        code_snippets: &[
            (Language::JavaScript, "var productExceptSelf = function(nums) {\n    // Write your code here\n};"),
            (Language::Python, "class Solution:\n    def productExceptSelf(self, nums: List[int]) -> List[int]:\n        pass"),
            (Language::Java, "class Solution {\n    public int[] productExceptSelf(int[] nums) {\n        return new int[0];\n    }\n}"),
        ],
        reference_solutions: &[],
    },
    ProblemFixture {
        title: "3Sum",
        description: "Given an integer array nums, return all the triplets [nums[i], nums[j], nums[k]] such that i != j, i != k, and j != k, and nums[i] + nums[j] + nums[k] == 0.\n\nNotice that the solution set must not contain duplicate triplets.",
        difficulty: Difficulty::Medium,
        tags: &["Array", "Two Pointers", "Sorting"],
        companies: &["Meta", "Google"],
        constraints: "3 <= nums.length <= 3000\n-10^5 <= nums[i] <= 10^5",
        hints: Some("Sort first.\nFix one element and use two pointers for the rest.\nSkip equal neighbours to avoid duplicates."),
        editorial: None,
        testcases: &[
            FixtureTestCase { input: "-1 0 1 2 -1 -4", output: "[[-1,-1,2],[-1,0,1]]" },
            FixtureTestCase { input: "0 1 1", output: "[]" },
            FixtureTestCase { input: "0 0 0", output: "[[0,0,0]]" },
        ],
        examples: &[(
            Language::JavaScript,
            FixtureExample {
                input: "nums = [-1,0,1,2,-1,-4]",
                output: "[[-1,-1,2],[-1,0,1]]",
                explanation: "The distinct triplets summing to zero are [-1,0,1] and [-1,-1,2].",
            },
        )],
        code_snippets: &[
            (Language::JavaScript, "var threeSum = function(nums) {\n    // Write your code here\n};"),
            (Language::Python, "class Solution:\n    def threeSum(self, nums: List[int]) -> List[List[int]]:\n        pass"),
            (Language::Java, "class Solution {\n    public List<List<Integer>> threeSum(int[] nums) {\n        return new ArrayList<>();\n    }\n}"),
        ],
        reference_solutions: &[],
    },
    ProblemFixture {
        title: "Search in Rotated Sorted Array",
        description: "There is an integer array nums sorted in ascending order (with distinct values), possibly rotated at an unknown pivot index.\n\nGiven the array nums after the possible rotation and an integer target, return the index of target if it is in nums, or -1 if it is not in nums.\n\nYou must write an algorithm with O(log n) runtime complexity.",
        difficulty: Difficulty::Medium,
        tags: &["Array", "Binary Search"],
        companies: &["LinkedIn", "Microsoft"],
        constraints: "1 <= nums.length <= 5000\n-10^4 <= nums[i] <= 10^4\nAll values of nums are unique.\n-10^4 <= target <= 10^4",
        hints: Some("One half of any split is always sorted."),
        editorial: None,
        testcases: &[
            FixtureTestCase { input: "4 5 6 7 0 1 2\n0", output: "4" },
            FixtureTestCase { input: "4 5 6 7 0 1 2\n3", output: "-1" },
            FixtureTestCase { input: "1\n0", output: "-1" },
        ],
        examples: &[(
            Language::Python,
            FixtureExample {
                input: "nums = [4,5,6,7,0,1,2], target = 0",
                output: "4",
                explanation: "0 sits at index 4 after rotation.",
            },
        )],
        code_snippets: &[
            (Language::JavaScript, "var search = function(nums, target) {\n    // Write your code here\n};"),
            (Language::Python, "class Solution:\n    def search(self, nums: List[int], target: int) -> int:\n        pass"),
            (Language::Java, "class Solution {\n    public int search(int[] nums, int target) {\n        return -1;\n    }\n}"),
        ],
        reference_solutions: &[],
    },
    ProblemFixture {
        title: "Coin Change",
        description: "You are given an integer array coins representing coins of different denominations and an integer amount representing a total amount of money.\n\nReturn the fewest number of coins that you need to make up that amount. If that amount of money cannot be made up by any combination of the coins, return -1.\n\nYou may assume that you have an infinite number of each kind of coin.",
        difficulty: Difficulty::Medium,
        tags: &["Array", "Dynamic Programming", "Breadth-First Search"],
        companies: &["Amazon", "Uber"],
        constraints: "1 <= coins.length <= 12\n1 <= coins[i] <= 2^31 - 1\n0 <= amount <= 10^4",
        hints: Some("dp[a] is the fewest coins that sum to a."),
        editorial: Some("Fill dp from 0 to amount. For each a and each coin c <= a, dp[a] = min(dp[a], dp[a - c] + 1). Unreachable amounts stay at infinity and map to -1."),
        testcases: &[
            FixtureTestCase { input: "1 2 5\n11", output: "3" },
            FixtureTestCase { input: "2\n3", output: "-1" },
            FixtureTestCase { input: "1\n0", output: "0" },
        ],
        examples: &[
            (
                Language::JavaScript,
                FixtureExample {
                    input: "coins = [1,2,5], amount = 11",
                    output: "3",
                    explanation: "11 = 5 + 5 + 1",
                },
            ),
            (
                Language::Java,
                FixtureExample {
                    input: "coins = [2], amount = 3",
                    output: "-1",
                    explanation: "3 cannot be made from coins of value 2.",
                },
            ),
        ],
        code_snippets: &[
            (Language::JavaScript, "var coinChange = function(coins, amount) {\n    // Write your code here\n};"),
            (Language::Python, "class Solution:\n    def coinChange(self, coins: List[int], amount: int) -> int:\n        pass"),
            (Language::Java, "class Solution {\n    public int coinChange(int[] coins, int amount) {\n        return -1;\n    }\n}"),
        ],
        reference_solutions: &[(
            Language::Java,
            "class Solution {\n    public int coinChange(int[] coins, int amount) {\n        int[] dp = new int[amount + 1];\n        Arrays.fill(dp, amount + 1);\n        dp[0] = 0;\n        for (int a = 1; a <= amount; a++) {\n            for (int c : coins) {\n                if (c <= a) dp[a] = Math.min(dp[a], dp[a - c] + 1);\n            }\n        }\n        return dp[amount] > amount ? -1 : dp[amount];\n    }\n}",
        )],
    },
    ProblemFixture {
        title: "Longest Common Subsequence",
        description: "Given two strings text1 and text2, return the length of their longest common subsequence. If there is no common subsequence, return 0.\n\nA subsequence of a string is a new string generated from the original string with some characters (can be none) deleted without changing the relative order of the remaining characters.",
        difficulty: Difficulty::Medium,
        tags: &["String", "Dynamic Programming"],
        companies: &["Google", "Amazon"],
        constraints: "1 <= text1.length, text2.length <= 1000\ntext1 and text2 consist of only lowercase English characters.",
        hints: None,
        editorial: None,
        testcases: &[
            FixtureTestCase { input: "abcde\nace", output: "3" },
            FixtureTestCase { input: "abc\nabc", output: "3" },
            FixtureTestCase { input: "abc\ndef", output: "0" },
        ],
        examples: &[(
            Language::Python,
            FixtureExample {
                input: "text1 = \"abcde\", text2 = \"ace\"",
                output: "3",
                explanation: "The longest common subsequence is \"ace\".",
            },
        )],
        code_snippets: &[
            (Language::JavaScript, "var longestCommonSubsequence = function(text1, text2) {\n    // Write your code here\n};"),
            (Language::Python, "class Solution:\n    def longestCommonSubsequence(self, text1: str, text2: str) -> int:\n        pass"),
            (Language::Java, "class Solution {\n    public int longestCommonSubsequence(String text1, String text2) {\n        return 0;\n    }\n}"),
        ],
        reference_solutions: &[],
    },
    ProblemFixture {
        title: "Number of Islands",
        description: "Given an m x n 2D binary grid which represents a map of '1's (land) and '0's (water), return the number of islands.\n\nAn island is surrounded by water and is formed by connecting adjacent lands horizontally or vertically. You may assume all four edges of the grid are all surrounded by water.",
        difficulty: Difficulty::Medium,
        tags: &["Array", "Depth-First Search", "Breadth-First Search", "Union Find", "Matrix"],
        companies: &["Amazon", "Meta", "Bloomberg"],
        constraints: "m == grid.length\nn == grid[i].length\n1 <= m, n <= 300\ngrid[i][j] is '0' or '1'.",
        hints: Some("Flood-fill each unvisited land cell and count how many fills you start."),
        editorial: None,
        testcases: &[
            FixtureTestCase { input: "4 5\n11110\n11010\n11000\n00000", output: "1" },
            FixtureTestCase { input: "4 5\n11000\n11000\n00100\n00011", output: "3" },
        ],
        examples: &[(
            Language::JavaScript,
            FixtureExample {
                input: "grid = [[\"1\",\"1\",\"0\",\"0\",\"0\"],[\"1\",\"1\",\"0\",\"0\",\"0\"],[\"0\",\"0\",\"1\",\"0\",\"0\"],[\"0\",\"0\",\"0\",\"1\",\"1\"]]",
                output: "3",
                explanation: "There are three separate groups of connected land.",
            },
        )],
        code_snippets: &[
            (Language::JavaScript, "var numIslands = function(grid) {\n    // Write your code here\n};"),
            (Language::Python, "class Solution:\n    def numIslands(self, grid: List[List[str]]) -> int:\n        pass"),
            (Language::Java, "class Solution {\n    public int numIslands(char[][] grid) {\n        return 0;\n    }\n}"),
        ],
        reference_solutions: &[],
    },
    ProblemFixture {
        title: "Valid Anagram",
        description: "Given two strings s and t, return true if t is an anagram of s, and false otherwise.",
        difficulty: Difficulty::Easy,
        tags: &["Hash Table", "String", "Sorting"],
        companies: &["Uber", "Bloomberg"],
        constraints: "1 <= s.length, t.length <= 5 * 10^4\ns and t consist of lowercase English letters.",
        hints: Some("Count letters in both strings."),
        editorial: None,
        testcases: &[
            FixtureTestCase { input: "anagram\nnagaram", output: "true" },
            FixtureTestCase { input: "rat\ncar", output: "false" },
        ],
        examples: &[
            (
                Language::JavaScript,
                FixtureExample {
                    input: "s = \"anagram\", t = \"nagaram\"",
                    output: "true",
                    explanation: "Both strings use the same letters the same number of times.",
                },
            ),
            (
                Language::Python,
                FixtureExample {
                    input: "s = \"rat\", t = \"car\"",
                    output: "false",
                    explanation: "t has a 'c' where s has a 't'.",
                },
            ),
        ],
        code_snippets: &[
            (Language::JavaScript, "var isAnagram = function(s, t) {\n    // Write your code here\n};"),
            (Language::Python, "class Solution:\n    def isAnagram(self, s: str, t: str) -> bool:\n        pass"),
            (Language::Java, "class Solution {\n    public boolean isAnagram(String s, String t) {\n        return false;\n    }\n}"),
        ],
        reference_solutions: &[(
            Language::Python,
            "class Solution:\n    def isAnagram(self, s, t):\n        return sorted(s) == sorted(t)",
        )],
    },
    ProblemFixture {
        title: "Group Anagrams",
        description: "Given an array of strings strs, group the anagrams together. You can return the answer in any order.",
        difficulty: Difficulty::Medium,
        tags: &["Array", "Hash Table", "String", "Sorting"],
        companies: &["Amazon", "Goldman Sachs"],
        constraints: "1 <= strs.length <= 10^4\n0 <= strs[i].length <= 100\nstrs[i] consists of lowercase English letters.",
        hints: Some("Anagrams share the same sorted form."),
        editorial: None,
        testcases: &[
            FixtureTestCase { input: "eat tea tan ate nat bat", output: "[[\"bat\"],[\"nat\",\"tan\"],[\"ate\",\"eat\",\"tea\"]]" },
            FixtureTestCase { input: "a", output: "[[\"a\"]]" },
        ],
        examples: &[(
            Language::Java,
            FixtureExample {
                input: "strs = [\"eat\",\"tea\",\"tan\",\"ate\",\"nat\",\"bat\"]",
                output: "[[\"bat\"],[\"nat\",\"tan\"],[\"ate\",\"eat\",\"tea\"]]",
                explanation: "Words are grouped by their sorted letters.",
            },
        )],
        code_snippets: &[
            (Language::JavaScript, "var groupAnagrams = function(strs) {\n    // Write your code here\n};"),
            (Language::Python, "class Solution:\n    def groupAnagrams(self, strs: List[str]) -> List[List[str]]:\n        pass"),
            (Language::Java, "class Solution {\n    public List<List<String>> groupAnagrams(String[] strs) {\n        return new ArrayList<>();\n    }\n}"),
        ],
        reference_solutions: &[],
    },
    ProblemFixture {
        title: "Median of Two Sorted Arrays",
        description: "Given two sorted arrays nums1 and nums2 of size m and n respectively, return the median of the two sorted arrays.\n\nThe overall run time complexity should be O(log (m+n)).",
        difficulty: Difficulty::Hard,
        tags: &["Array", "Binary Search", "Divide and Conquer"],
        companies: &["Google", "Apple", "Adobe"],
        constraints: "nums1.length == m\nnums2.length == n\n0 <= m, n <= 1000\n1 <= m + n <= 2000\n-10^6 <= nums1[i], nums2[i] <= 10^6",
        hints: Some("Binary search the partition point in the shorter array."),
        editorial: Some("Partition both arrays so the left halves together hold (m + n + 1) / 2 elements and every left element is <= every right element. Binary search the cut in the shorter array."),
        testcases: &[
            FixtureTestCase { input: "1 3\n2", output: "2.00000" },
            FixtureTestCase { input: "1 2\n3 4", output: "2.50000" },
        ],
        examples: &[(
            Language::Python,
            FixtureExample {
                input: "nums1 = [1,2], nums2 = [3,4]",
                output: "2.50000",
                explanation: "Merged array = [1,2,3,4] and median is (2 + 3) / 2 = 2.5.",
            },
        )],
        code_snippets: &[
            (Language::JavaScript, "var findMedianSortedArrays = function(nums1, nums2) {\n    // Write your code here\n};"),
            (Language::Python, "class Solution:\n    def findMedianSortedArrays(self, nums1: List[int], nums2: List[int]) -> float:\n        pass"),
            (Language::Java, "class Solution {\n    public double findMedianSortedArrays(int[] nums1, int[] nums2) {\n        return 0.0;\n    }\n}"),
        ],
        reference_solutions: &[],
    },
    ProblemFixture {
        title: "Word Break",
        description: "Given a string s and a dictionary of strings wordDict, return true if s can be segmented into a space-separated sequence of one or more dictionary words.\n\nNote that the same word in the dictionary may be reused multiple times in the segmentation.",
        difficulty: Difficulty::Medium,
        tags: &["Hash Table", "String", "Dynamic Programming", "Trie"],
        companies: &["Meta", "Amazon"],
        constraints: "1 <= s.length <= 300\n1 <= wordDict.length <= 1000\n1 <= wordDict[i].length <= 20\nAll the strings of wordDict are unique.",
        hints: Some("dp[i] is true when s[..i] can be segmented."),
        editorial: None,
        testcases: &[
            FixtureTestCase { input: "leetcode\nleet code", output: "true" },
            FixtureTestCase { input: "applepenapple\napple pen", output: "true" },
            FixtureTestCase { input: "catsandog\ncats dog sand and cat", output: "false" },
        ],
        examples: &[(
            Language::JavaScript,
            FixtureExample {
                input: "s = \"leetcode\", wordDict = [\"leet\",\"code\"]",
                output: "true",
                explanation: "\"leetcode\" can be segmented as \"leet code\".",
            },
        )],
        code_snippets: &[
            (Language::JavaScript, "var wordBreak = function(s, wordDict) {\n    // Write your code here\n};"),
            (Language::Python, "class Solution:\n    def wordBreak(self, s: str, wordDict: List[str]) -> bool:\n        pass"),
            (Language::Java, "class Solution {\n    public boolean wordBreak(String s, List<String> wordDict) {\n        return false;\n    }\n}"),
        ],
        reference_solutions: &[],
    },
    ProblemFixture {
        title: "Merge k Sorted Lists",
        description: "You are given an array of k linked-lists lists, each linked-list is sorted in ascending order.\n\nMerge all the linked-lists into one sorted linked-list and return it.",
        difficulty: Difficulty::Hard,
        tags: &["Linked List", "Divide and Conquer", "Heap (Priority Queue)", "Merge Sort"],
        companies: &["Amazon", "Google", "Uber"],
        constraints: "k == lists.length\n0 <= k <= 10^4\n0 <= lists[i].length <= 500\n-10^4 <= lists[i][j] <= 10^4\nThe sum of lists[i].length will not exceed 10^4.",
        hints: Some("Keep the current head of every list in a min-heap."),
        editorial: None,
        testcases: &[
            FixtureTestCase { input: "3\n1 4 5\n1 3 4\n2 6", output: "[1,1,2,3,4,4,5,6]" },
            FixtureTestCase { input: "0", output: "[]" },
        ],
        examples: &[(
            Language::Python,
            FixtureExample {
                input: "lists = [[1,4,5],[1,3,4],[2,6]]",
                output: "[1,1,2,3,4,4,5,6]",
                explanation: "Merging the three sorted lists gives one sorted list.",
            },
        )],
        code_snippets: &[
            (Language::JavaScript, "var mergeKLists = function(lists) {\n    // Write your code here\n};"),
            (Language::Python, "class Solution:\n    def mergeKLists(self, lists: List[Optional[ListNode]]) -> Optional[ListNode]:\n        pass"),
            (Language::Java, "class Solution {\n    public ListNode mergeKLists(ListNode[] lists) {\n        return null;\n    }\n}"),
        ],
        reference_solutions: &[(
            Language::Python,
            "import heapq\n\nclass Solution:\n    def mergeKLists(self, lists):\n        heap = [(node.val, i, node) for i, node in enumerate(lists) if node]\n        heapq.heapify(heap)\n        dummy = tail = ListNode(0)\n        while heap:\n            _, i, node = heapq.heappop(heap)\n            tail.next = tail = node\n            if node.next:\n                heapq.heappush(heap, (node.next.val, i, node.next))\n        return dummy.next",
        )],
    },
];
